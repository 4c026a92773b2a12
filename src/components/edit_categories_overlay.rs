use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::hand_drawn_box::HandDrawnBox;
use crate::model::{Category, Task, TaskPatch};

#[derive(PartialEq, Clone, Copy)]
enum Field {
    CategoryName,
    SubCategory,
    Content,
}

#[derive(Properties, PartialEq, Clone)]
pub struct EditCategoriesOverlayProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub custom_categories: Vec<Category>,
    pub custom_tasks: Vec<Task>,
    pub on_update_category: Callback<(String, String)>,
    pub on_update_task: Callback<(String, TaskPatch)>,
    pub on_delete_category: Callback<String>,
    pub on_delete_task: Callback<String>,
}

/// Management overlay for user-created categories and tasks: inline rename
/// and edit, plus deletion (category deletion cascades in the reducer).
#[function_component(EditCategoriesOverlay)]
pub fn edit_categories_overlay(props: &EditCategoriesOverlayProps) -> Html {
    // (record id, field) currently being edited, with the draft text.
    let editing = use_state(|| None::<(String, Field)>);
    let draft = use_state(String::new);

    if !props.open {
        return html! {};
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let start_edit = |id: String, value: String, field: Field| {
        let editing = editing.clone();
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(Some((id.clone(), field)));
            draft.set(value.clone());
        })
    };

    // Commit the draft on blur/Enter; empty drafts are discarded at this
    // boundary and never reach the reducer.
    let save_edit = {
        let editing = editing.clone();
        let draft = draft.clone();
        let on_update_category = props.on_update_category.clone();
        let on_update_task = props.on_update_task.clone();
        Callback::from(move |_: ()| {
            if let Some((id, field)) = (*editing).clone() {
                let value = draft.trim().to_string();
                if !value.is_empty() {
                    match field {
                        Field::CategoryName => on_update_category.emit((id, value)),
                        Field::SubCategory => on_update_task.emit((
                            id,
                            TaskPatch {
                                sub_category: Some(value),
                                ..Default::default()
                            },
                        )),
                        Field::Content => on_update_task.emit((
                            id,
                            TaskPatch {
                                content: Some(value),
                                ..Default::default()
                            },
                        )),
                    }
                }
            }
            editing.set(None);
        })
    };

    let draft_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            draft.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_blur = {
        let save_edit = save_edit.clone();
        Callback::from(move |_: FocusEvent| save_edit.emit(()))
    };
    let on_keydown = {
        let save_edit = save_edit.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                save_edit.emit(());
            }
        })
    };

    let is_editing =
        |id: &str, field: Field| matches!(&*editing, Some((eid, ef)) if eid == id && *ef == field);

    let edit_input_style = "flex:1; background:white; border:2px solid rgba(0,0,0,0.2); padding:4px 8px; border-radius:4px; font-weight:bold; outline:none;";

    html! {
        <div style="position:fixed; inset:0; z-index:85; display:flex; align-items:center; justify-content:center; padding:24px; background:rgba(0,0,0,0.4);">
            <div style="width:100%; max-width:640px;">
                <HandDrawnBox>
                    <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:24px; border-bottom:1px solid rgba(0,0,0,0.1); padding-bottom:8px;">
                        <h2 style="font-size:20px; font-weight:bold; margin:0;">{ "管理自定义分类与任务" }</h2>
                        <button onclick={close.clone()} style="font-size:24px; font-weight:bold; border:none; background:none; cursor:pointer;">{ "×" }</button>
                    </div>

                    <div style="max-height:70vh; overflow-y:auto; display:flex; flex-direction:column; gap:24px; padding:4px;">
                        { if props.custom_categories.is_empty() {
                            html! { <p style="text-align:center; padding:32px 0; color:#9ca3af; font-style:italic;">{ "暂无自定义分类" }</p> }
                        } else {
                            html! { for props.custom_categories.iter().map(|cat| {
                                let cat_tasks: Vec<&Task> = props.custom_tasks.iter()
                                    .filter(|t| t.category == cat.id)
                                    .collect();
                                let delete_cat = {
                                    let cb = props.on_delete_category.clone();
                                    let id = cat.id.clone();
                                    Callback::from(move |_| cb.emit(id.clone()))
                                };
                                html! {
                                    <div key={cat.id.clone()} style="padding:16px; background:#f9fafb; border-radius:16px; border:1px solid rgba(0,0,0,0.05); display:flex; flex-direction:column; gap:16px;">
                                        <div style="display:flex; align-items:center; justify-content:space-between; gap:8px; border-bottom:1px solid rgba(0,0,0,0.05); padding-bottom:8px;">
                                            <div style="display:flex; align-items:center; gap:12px; flex:1;">
                                                <span style="font-size:24px;">{ &cat.icon }</span>
                                                { if is_editing(&cat.id, Field::CategoryName) {
                                                    html! {
                                                        <input
                                                            value={(*draft).clone()}
                                                            oninput={draft_input.clone()}
                                                            onblur={on_blur.clone()}
                                                            onkeydown={on_keydown.clone()}
                                                            style={edit_input_style}
                                                        />
                                                    }
                                                } else {
                                                    html! {
                                                        <>
                                                            <span style="font-weight:bold; font-size:18px;">{ &cat.name }</span>
                                                            <button
                                                                onclick={start_edit(cat.id.clone(), cat.name.clone(), Field::CategoryName)}
                                                                style="font-size:12px; color:#3b82f6; border:none; background:none; text-decoration:underline; cursor:pointer;"
                                                            >
                                                                { "修改名称" }
                                                            </button>
                                                        </>
                                                    }
                                                } }
                                            </div>
                                            <button onclick={delete_cat} style="font-size:12px; color:#ef4444; border:none; background:none; cursor:pointer;">{ "🗑 删除分类" }</button>
                                        </div>

                                        <div style="padding-left:16px; display:flex; flex-direction:column; gap:12px;">
                                            { for cat_tasks.iter().map(|task| {
                                                let delete_task = {
                                                    let cb = props.on_delete_task.clone();
                                                    let id = task.id.clone();
                                                    Callback::from(move |_| cb.emit(id.clone()))
                                                };
                                                html! {
                                                    <div key={task.id.clone()} style="background:white; padding:12px; border-radius:12px; border:1px solid rgba(0,0,0,0.05); display:flex; flex-direction:column; gap:8px; box-shadow:0 1px 2px rgba(0,0,0,0.05);">
                                                        <div style="display:flex; align-items:center; justify-content:space-between;">
                                                            <div style="display:flex; align-items:center; gap:8px; flex:1;">
                                                                <span style="font-size:10px; color:#9ca3af; font-weight:bold;">{ "自分类:" }</span>
                                                                { if is_editing(&task.id, Field::SubCategory) {
                                                                    html! {
                                                                        <input
                                                                            value={(*draft).clone()}
                                                                            oninput={draft_input.clone()}
                                                                            onblur={on_blur.clone()}
                                                                            onkeydown={on_keydown.clone()}
                                                                            style="font-size:12px; background:#f9fafb; border:1px solid rgba(0,0,0,0.2); padding:2px 4px; border-radius:4px; outline:none;"
                                                                        />
                                                                    }
                                                                } else {
                                                                    html! {
                                                                        <>
                                                                            <span style="font-size:12px; font-weight:bold; color:#4b5563;">{ &task.sub_category }</span>
                                                                            <button
                                                                                onclick={start_edit(task.id.clone(), task.sub_category.clone(), Field::SubCategory)}
                                                                                style="font-size:10px; color:#60a5fa; border:none; background:none; cursor:pointer;"
                                                                            >
                                                                                { "📝" }
                                                                            </button>
                                                                        </>
                                                                    }
                                                                } }
                                                            </div>
                                                            <button onclick={delete_task} style="font-size:10px; color:#ef4444; border:none; background:none; cursor:pointer;">{ "🗑" }</button>
                                                        </div>
                                                        <div style="display:flex; align-items:flex-start; gap:8px;">
                                                            { if is_editing(&task.id, Field::Content) {
                                                                html! {
                                                                    <input
                                                                        value={(*draft).clone()}
                                                                        oninput={draft_input.clone()}
                                                                        onblur={on_blur.clone()}
                                                                        onkeydown={on_keydown.clone()}
                                                                        style="flex:1; font-size:14px; background:#f9fafb; border:1px solid rgba(0,0,0,0.2); padding:4px 8px; border-radius:4px; line-height:1.6; outline:none;"
                                                                    />
                                                                }
                                                            } else {
                                                                html! {
                                                                    <>
                                                                        <p style="font-size:14px; font-weight:500; line-height:1.6; flex:1; color:#374151; margin:0;">{ &task.content }</p>
                                                                        <button
                                                                            onclick={start_edit(task.id.clone(), task.content.clone(), Field::Content)}
                                                                            style="font-size:12px; color:#60a5fa; border:none; background:none; text-decoration:underline; cursor:pointer;"
                                                                        >
                                                                            { "编辑内容" }
                                                                        </button>
                                                                    </>
                                                                }
                                                            } }
                                                        </div>
                                                    </div>
                                                }
                                            }) }
                                            { if cat_tasks.is_empty() {
                                                html! { <p style="font-size:12px; color:#9ca3af; font-style:italic; margin:0;">{ "该分类下暂无任务" }</p> }
                                            } else {
                                                html! {}
                                            } }
                                        </div>
                                    </div>
                                }
                            }) }
                        } }
                    </div>

                    <div style="margin-top:24px;">
                        <button
                            onclick={close}
                            style="width:100%; padding:16px 0; background:black; color:white; border:none; border-radius:12px; font-weight:bold; cursor:pointer; box-shadow:0 10px 15px rgba(0,0,0,0.1);"
                        >
                            { "完成并关闭" }
                        </button>
                    </div>
                </HandDrawnBox>
            </div>
        </div>
    }
}
