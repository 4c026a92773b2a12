use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Shorten long task text for map labels (character-based, so multi-byte
/// text truncates cleanly).
pub fn truncate_label(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(2)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_label;

    #[test]
    fn truncates_by_characters_not_bytes() {
        assert_eq!(truncate_label("短标签", 18), "短标签");
        let long = "这是一条非常非常长的丰容任务内容文字描述";
        let cut = truncate_label(long, 18);
        assert_eq!(cut.chars().count(), 19); // 16 chars + "..."
        assert!(cut.ends_with("..."));
    }
}
