use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::hand_drawn_box::HandDrawnBox;
use crate::model::{Category, CategoryId, Task};

#[derive(PartialEq, Clone, Copy)]
enum Tab {
    Task,
    Category,
}

#[derive(Properties, PartialEq, Clone)]
pub struct CustomTaskOverlayProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub categories: Vec<Category>,
    pub on_add_task: Callback<Task>,
    pub on_add_category: Callback<Category>,
}

/// Creation overlay: one tab for new tasks, one for new categories. Empty
/// names/content never reach the reducer.
#[function_component(CustomTaskOverlay)]
pub fn custom_task_overlay(props: &CustomTaskOverlayProps) -> Html {
    let tab = use_state(|| Tab::Task);
    let task_text = use_state(String::new);
    let sub_cat_text = use_state(String::new);
    let selected_cat = use_state(|| {
        props
            .categories
            .first()
            .map(|c| c.id.clone())
            .unwrap_or_else(|| "sensory".to_string())
    });
    let cat_name = use_state(String::new);
    let cat_icon = use_state(|| "🌟".to_string());
    let cat_color = use_state(|| "#ffed4a".to_string());

    if !props.open {
        return html! {};
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let add_task = {
        let on_add_task = props.on_add_task.clone();
        let on_close = props.on_close.clone();
        let task_text = task_text.clone();
        let sub_cat_text = sub_cat_text.clone();
        let selected_cat = selected_cat.clone();
        Callback::from(move |_| {
            let content = task_text.trim().to_string();
            if content.is_empty() {
                return;
            }
            let sub = sub_cat_text.trim();
            on_add_task.emit(Task {
                id: format!("custom-task-{}", js_sys::Date::now() as u64),
                category: (*selected_cat).clone(),
                sub_category: if sub.is_empty() {
                    "我的探索".to_string()
                } else {
                    sub.to_string()
                },
                content,
                is_custom: true,
            });
            task_text.set(String::new());
            sub_cat_text.set(String::new());
            on_close.emit(());
        })
    };

    let add_category = {
        let on_add_category = props.on_add_category.clone();
        let cat_name = cat_name.clone();
        let cat_icon = cat_icon.clone();
        let cat_color = cat_color.clone();
        let tab = tab.clone();
        Callback::from(move |_| {
            let name = cat_name.trim().to_string();
            if name.is_empty() {
                return;
            }
            on_add_category.emit(Category {
                id: format!("custom-cat-{}", js_sys::Date::now() as u64),
                name,
                icon: (*cat_icon).clone(),
                color: (*cat_color).clone(),
                x: 35.0 + js_sys::Math::random() * 30.0,
                y: 35.0 + js_sys::Math::random() * 30.0,
            });
            cat_name.set(String::new());
            tab.set(Tab::Task);
        })
    };

    let input_value = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |e: InputEvent| {
            handle.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let textarea_value = {
        let task_text = task_text.clone();
        Callback::from(move |e: InputEvent| {
            task_text.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let tab_button = |target: Tab, label: &str| {
        let tab = tab.clone();
        let active = *tab == target;
        let style = if active {
            "flex:1; padding:8px 0; font-weight:bold; border:none; background:none; border-bottom:2px solid black; color:black; cursor:pointer;"
        } else {
            "flex:1; padding:8px 0; font-weight:bold; border:none; background:none; color:#d1d5db; cursor:pointer;"
        };
        html! {
            <button onclick={Callback::from(move |_| tab.set(target))} style={style}>
                { label }
            </button>
        }
    };

    let label_style = "font-size:12px; font-weight:bold; color:#9ca3af; display:block; margin-bottom:4px;";
    let input_style = "width:100%; padding:12px; background:#f9fafb; border-radius:12px; border:1px solid rgba(0,0,0,0.1); outline:none; box-sizing:border-box;";

    html! {
        <div style="position:fixed; inset:0; z-index:80; display:flex; align-items:center; justify-content:center; padding:24px; background:rgba(0,0,0,0.4);">
            <div style="width:100%; max-width:440px;">
                <HandDrawnBox>
                    <div style="display:flex; border-bottom:1px solid rgba(0,0,0,0.1); margin-bottom:24px;">
                        { tab_button(Tab::Task, "新增项目") }
                        { tab_button(Tab::Category, "新增主分类") }
                    </div>

                    { if *tab == Tab::Task { html! {
                        <div style="display:flex; flex-direction:column; gap:16px;">
                            <div>
                                <label style={label_style}>{ "选择所属主分类" }</label>
                                <div style="display:flex; flex-wrap:wrap; gap:8px; max-height:96px; overflow-y:auto; padding:4px;">
                                    { for props.categories.iter().map(|c| {
                                        let selected_cat = selected_cat.clone();
                                        let id: CategoryId = c.id.clone();
                                        let chosen = *selected_cat == c.id;
                                        let style = format!(
                                            "padding:4px 12px; border-radius:9999px; font-size:12px; font-weight:bold; cursor:pointer; background-color:{}; border:1px solid {}; opacity:{};",
                                            c.color,
                                            if chosen { "black" } else { "transparent" },
                                            if chosen { "1" } else { "0.5" },
                                        );
                                        html! {
                                            <button
                                                key={c.id.clone()}
                                                onclick={Callback::from(move |_| selected_cat.set(id.clone()))}
                                                style={style}
                                            >
                                                { format!("{} {}", c.icon, c.name) }
                                            </button>
                                        }
                                    }) }
                                </div>
                            </div>
                            <div>
                                <label style={label_style}>{ "自分类名称" }</label>
                                <input
                                    value={(*sub_cat_text).clone()}
                                    oninput={input_value(&sub_cat_text)}
                                    placeholder="例如：书影音、手工制作..."
                                    style={input_style}
                                />
                            </div>
                            <div>
                                <label style={label_style}>{ "具体丰容任务" }</label>
                                <textarea
                                    value={(*task_text).clone()}
                                    oninput={textarea_value}
                                    placeholder="这一刻，你想如何丰容自己？"
                                    style="width:100%; height:96px; padding:16px; background:#f9fafb; border-radius:12px; border:2px dashed rgba(0,0,0,0.1); outline:none; box-sizing:border-box; resize:none;"
                                />
                            </div>
                            <div style="display:flex; gap:16px; padding-top:8px;">
                                <button onclick={close.clone()} style="flex:1; padding:12px 0; font-weight:bold; color:#9ca3af; border:none; background:none; cursor:pointer;">{ "取消" }</button>
                                <button onclick={add_task} style="flex:2; padding:12px 0; background:black; color:white; border:none; border-radius:12px; font-weight:bold; cursor:pointer;">{ "发布丰容" }</button>
                            </div>
                        </div>
                    } } else { html! {
                        <div style="display:flex; flex-direction:column; gap:16px;">
                            <div>
                                <label style={label_style}>{ "分类名称" }</label>
                                <input
                                    value={(*cat_name).clone()}
                                    oninput={input_value(&cat_name)}
                                    placeholder="例如：精神丰容"
                                    style={input_style}
                                />
                            </div>
                            <div style="display:flex; gap:16px;">
                                <div style="flex:1;">
                                    <label style={label_style}>{ "图标 (Emoji)" }</label>
                                    <input
                                        value={(*cat_icon).clone()}
                                        oninput={input_value(&cat_icon)}
                                        style="width:100%; padding:12px; background:#f9fafb; border-radius:12px; border:1px solid rgba(0,0,0,0.1); outline:none; text-align:center; box-sizing:border-box;"
                                    />
                                </div>
                                <div style="flex:1;">
                                    <label style={label_style}>{ "主题色" }</label>
                                    <input
                                        type="color"
                                        value={(*cat_color).clone()}
                                        oninput={input_value(&cat_color)}
                                        style="width:100%; height:48px; padding:4px; background:#f9fafb; border-radius:12px; border:1px solid rgba(0,0,0,0.1); cursor:pointer; box-sizing:border-box;"
                                    />
                                </div>
                            </div>
                            <div style="display:flex; gap:16px; padding-top:16px;">
                                <button
                                    onclick={{
                                        let tab = tab.clone();
                                        Callback::from(move |_| tab.set(Tab::Task))
                                    }}
                                    style="flex:1; padding:12px 0; font-weight:bold; color:#9ca3af; border:none; background:none; cursor:pointer;"
                                >
                                    { "返回" }
                                </button>
                                <button onclick={add_category} style="flex:2; padding:12px 0; background:black; color:white; border:none; border-radius:12px; font-weight:bold; cursor:pointer;">{ "创建分类" }</button>
                            </div>
                        </div>
                    } } }
                </HandDrawnBox>
            </div>
        </div>
    }
}
