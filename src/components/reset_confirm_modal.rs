use yew::prelude::*;

use super::hand_drawn_box::HandDrawnBox;

#[derive(Properties, PartialEq, Clone)]
pub struct ResetConfirmModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component(ResetConfirmModal)]
pub fn reset_confirm_modal(props: &ResetConfirmModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let confirm = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:fixed; inset:0; z-index:100; display:flex; align-items:center; justify-content:center; padding:24px; background:rgba(0,0,0,0.6);">
            <div style="width:100%; max-width:384px;">
                <HandDrawnBox>
                    <div style="text-align:center; display:flex; flex-direction:column; gap:16px;">
                        <div style="font-size:48px;">{ "⚠️" }</div>
                        <h2 style="font-size:24px; font-weight:bold; color:#dc2626; margin:0;">{ "确定要重新开始吗？" }</h2>
                        <p style="color:#6b7280; font-size:14px; line-height:1.7; margin:0;">
                            { "这将会清除所有已完成的丰容记录、自定义任务和分类，让一切回到最初。此操作不可撤销。" }
                        </p>
                    </div>
                    <div style="display:flex; gap:16px; margin-top:32px;">
                        <button
                            onclick={close}
                            style="flex:1; padding:12px 16px; border:2px solid black; background:white; border-radius:15px 45px 15px 45px / 45px 15px 45px 15px; font-weight:bold; cursor:pointer;"
                        >
                            { "保留现状" }
                        </button>
                        <button
                            onclick={confirm}
                            style="flex:1; padding:12px 16px; background:#ef4444; color:white; border:2px solid black; border-radius:45px 15px 45px 15px / 15px 45px 15px 45px; box-shadow:4px 4px 0 0 rgba(0,0,0,1); font-weight:bold; cursor:pointer;"
                        >
                            { "确定清除" }
                        </button>
                    </div>
                </HandDrawnBox>
            </div>
        </div>
    }
}
