use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct HandDrawnBoxProps {
    pub children: Children,
    #[prop_or_else(|| "#fff".to_string())]
    pub color: String,
}

/// Wobbly-bordered card used by every modal and overlay.
#[function_component(HandDrawnBox)]
pub fn hand_drawn_box(props: &HandDrawnBoxProps) -> Html {
    html! {
        <div class="hand-drawn" style="position:relative;">
            <div
                class="hand-drawn-frame"
                style={format!(
                    "position:absolute; inset:0; border:2px solid rgba(0,0,0,0.8); background-color:{}; border-radius:255px 15px 225px 15px / 15px 225px 15px 255px; transform:rotate(-1deg);",
                    props.color
                )}
            />
            <div style="position:relative; padding:24px; z-index:10; color:#1f2937;">
                { props.children.clone() }
            </div>
        </div>
    }
}
