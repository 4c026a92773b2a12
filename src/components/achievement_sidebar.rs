use yew::prelude::*;

use crate::model::{Category, CompletionRecord, Task};

#[derive(Properties, PartialEq, Clone)]
pub struct AchievementSidebarProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub completed_tasks: Vec<CompletionRecord>,
    pub all_tasks: Vec<Task>,
    pub categories: Vec<Category>,
    /// (task id, delta) count adjustment from the +/- buttons.
    pub on_adjust_count: Callback<(String, i32)>,
}

#[function_component(AchievementSidebar)]
pub fn achievement_sidebar(props: &AchievementSidebarProps) -> Html {
    let close = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    // Completions grouped per category, most-repeated first. Records whose
    // task no longer resolves are skipped.
    let grouped: Vec<(&Category, Vec<(&Task, &CompletionRecord)>)> = props
        .categories
        .iter()
        .map(|cat| {
            let mut rows: Vec<(&Task, &CompletionRecord)> = props
                .completed_tasks
                .iter()
                .filter_map(|rec| {
                    let task = props.all_tasks.iter().find(|t| t.id == rec.task_id)?;
                    (task.category == cat.id).then_some((task, rec))
                })
                .collect();
            rows.sort_by(|a, b| b.1.count.cmp(&a.1.count));
            (cat, rows)
        })
        .collect();

    let slide = if props.open {
        "transform:translateX(0);"
    } else {
        "transform:translateX(-100%);"
    };

    html! {
        <div style={format!(
            "position:fixed; top:0; bottom:0; left:0; width:100%; max-width:384px; background:white; z-index:90; box-shadow:0 25px 50px rgba(0,0,0,0.25); transition:transform 500ms ease-in-out; {slide}"
        )}>
            <div style="height:100%; display:flex; flex-direction:column; padding:32px; overflow-y:auto;">
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:40px; border-bottom:2px solid black; padding-bottom:16px;">
                    <h2 style="font-size:28px; font-weight:bold; color:#1f2937; letter-spacing:0.1em; margin:0;">{ "丰容成就馆" }</h2>
                    <button onclick={close} style="font-size:32px; background:none; border:none; cursor:pointer;">{ "×" }</button>
                </div>

                { for grouped.iter().filter(|(_, rows)| !rows.is_empty()).map(|(cat, rows)| html! {
                    <div key={cat.id.clone()} style="margin-bottom:48px;">
                        <div style="display:flex; align-items:center; gap:12px; margin-bottom:24px;">
                            <span style="font-size:28px; padding:8px; background:#f9fafb; border-radius:12px; border:1px solid rgba(0,0,0,0.05);">{ &cat.icon }</span>
                            <h3 style="font-size:20px; font-weight:bold; color:#1f2937; margin:0;">{ &cat.name }</h3>
                        </div>
                        <div style="display:flex; flex-direction:column; gap:16px;">
                            { for rows.iter().map(|(task, rec)| {
                                let minus = {
                                    let cb = props.on_adjust_count.clone();
                                    let id = task.id.clone();
                                    Callback::from(move |_| cb.emit((id.clone(), -1)))
                                };
                                let plus = {
                                    let cb = props.on_adjust_count.clone();
                                    let id = task.id.clone();
                                    Callback::from(move |_| cb.emit((id.clone(), 1)))
                                };
                                html! {
                                    <div key={task.id.clone()} style="display:flex; justify-content:space-between; align-items:center; gap:16px; background:#fdfaf5; padding:16px; border-radius:16px; border:1px solid rgba(0,0,0,0.1); box-shadow:0 1px 2px rgba(0,0,0,0.05);">
                                        <div style="flex:1;">
                                            <p style="font-size:14px; font-weight:bold; color:#1f2937; line-height:1.3; margin:0;">{ &task.content }</p>
                                            <p style="font-size:10px; color:#9ca3af; margin:8px 0 0; text-transform:uppercase; letter-spacing:0.15em;">{ &task.sub_category }</p>
                                        </div>
                                        <div style="display:flex; align-items:center; gap:12px; background:white; padding:8px 12px; border-radius:9999px; border:1px solid rgba(0,0,0,0.05);">
                                            <button onclick={minus} style="width:24px; height:24px; border:none; background:none; border-radius:50%; color:#9ca3af; cursor:pointer;">{ "-" }</button>
                                            <span style="font-size:14px; font-weight:900; min-width:16px; text-align:center;">{ rec.count }</span>
                                            <button onclick={plus} style="width:24px; height:24px; border:none; background:none; border-radius:50%; color:black; cursor:pointer;">{ "+" }</button>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>
                }) }

                { if props.completed_tasks.is_empty() {
                    html! {
                        <div style="flex:1; display:flex; flex-direction:column; align-items:center; justify-content:center; opacity:0.3; padding:80px 0;">
                            <div style="font-size:72px; margin-bottom:24px;">{ "🏜️" }</div>
                            <p style="font-size:18px; font-style:italic; font-weight:500;">{ "荒野之中，静候丰容" }</p>
                        </div>
                    }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}
