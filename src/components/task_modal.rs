use yew::prelude::*;

use super::hand_drawn_box::HandDrawnBox;
use crate::model::{Category, Task};

#[derive(Properties, PartialEq, Clone)]
pub struct TaskModalProps {
    /// The roll's pick, pending confirmation. `None` hides the modal.
    pub task: Option<Task>,
    pub category: Option<Category>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let (Some(task), Some(category)) = (&props.task, &props.category) else {
        return html! {};
    };

    let confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cancel = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:fixed; inset:0; z-index:50; display:flex; align-items:center; justify-content:center; padding:24px; background:rgba(0,0,0,0.4);">
            <div style="width:100%; max-width:440px;">
                <HandDrawnBox>
                    <div style="text-align:center; margin-bottom:24px;">
                        <div style={format!(
                            "display:inline-block; padding:4px 12px; border-radius:9999px; font-size:12px; font-weight:bold; margin-bottom:12px; border:1px solid rgba(0,0,0,0.2); background-color:{};",
                            category.color
                        )}>
                            { format!("{} · {}", category.name, task.sub_category) }
                        </div>
                        <h2 style="font-size:24px; font-weight:bold; color:#1f2937; line-height:1.6; padding:0 16px; margin:0;">
                            { &task.content }
                        </h2>
                    </div>
                    <div style="display:flex; gap:16px; margin-top:32px;">
                        <button
                            onclick={cancel}
                            style="flex:1; padding:12px 16px; border:2px solid black; background:white; border-radius:15px 45px 15px 45px / 45px 15px 45px 15px; font-weight:bold; color:#4b5563; cursor:pointer;"
                        >
                            { "再等等" }
                        </button>
                        <button
                            onclick={confirm}
                            style={format!(
                                "flex:1; padding:12px 16px; border:2px solid black; border-radius:45px 15px 45px 15px / 15px 45px 15px 45px; box-shadow:4px 4px 0 0 rgba(0,0,0,1); font-weight:bold; color:#1f2937; cursor:pointer; background-color:{};",
                                category.color
                            )}
                        >
                            { "完成！" }
                        </button>
                    </div>
                </HandDrawnBox>
            </div>
        </div>
    }
}
