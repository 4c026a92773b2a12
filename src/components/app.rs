use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::{
    achievement_sidebar::AchievementSidebar, custom_task_overlay::CustomTaskOverlay,
    edit_categories_overlay::EditCategoriesOverlay, map_canvas::MapCanvas,
    reset_confirm_modal::ResetConfirmModal, task_modal::TaskModal,
};
use crate::layout;
use crate::model::{AppAction, CategoryId, Task, TaskPatch};
use crate::state::roller::FLICKER_INTERVAL_MS;
use crate::state::{RollerTick, SelectionRoller};
use crate::storage;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(storage::load_or_default);
    let active_task = use_state(|| None::<Task>);
    let sidebar_open = use_state(|| false);
    let custom_open = use_state(|| false);
    let edit_open = use_state(|| false);
    let reset_open = use_state(|| false);
    let rolling = use_state(|| false);
    let highlighted = use_state(|| None::<String>);
    let roller = use_mut_ref(SelectionRoller::default);
    let roll_timer = use_mut_ref(|| None::<i32>);
    let roll_tick_cb = use_mut_ref(|| None::<Closure<dyn FnMut()>>);

    // Count the visitor once per browser session.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if storage::first_visit_this_session() {
                state.dispatch(AppAction::IncrementVisitor);
            }
            || ()
        });
    }

    // Persist the whole state after every mutation.
    {
        let snapshot = (*state).clone();
        use_effect_with(snapshot, move |s| {
            storage::save(s);
            || ()
        });
    }

    // The roll interval must not outlive the view.
    {
        let roll_timer = roll_timer.clone();
        let roll_tick_cb = roll_tick_cb.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(id) = roll_timer.borrow_mut().take() {
                    if let Some(win) = web_sys::window() {
                        win.clear_interval_with_handle(id);
                    }
                }
                roll_tick_cb.borrow_mut().take();
            }
        });
    }

    // Kick off a roll over `pool` and drive the state machine on a 120 ms
    // interval until it reports Finished.
    let start_roll = {
        let state = state.clone();
        let rolling = rolling.clone();
        let highlighted = highlighted.clone();
        let active_task = active_task.clone();
        let roller = roller.clone();
        let roll_timer = roll_timer.clone();
        let roll_tick_cb = roll_tick_cb.clone();
        Callback::from(move |pool: Vec<Task>| {
            let mut node_ids: Vec<String> = state
                .all_categories()
                .iter()
                .map(|c| c.id.clone())
                .collect();
            for t in state.all_tasks() {
                if !node_ids.contains(&t.sub_category) {
                    node_ids.push(t.sub_category);
                }
            }
            if !roller
                .borrow_mut()
                .start(pool, node_ids, js_sys::Date::now())
            {
                return;
            }
            rolling.set(true);

            let window = web_sys::window().expect("window");
            let tick = {
                let roller = roller.clone();
                let rolling = rolling.clone();
                let highlighted = highlighted.clone();
                let active_task = active_task.clone();
                let roll_timer = roll_timer.clone();
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let event = roller
                        .borrow_mut()
                        .tick(js_sys::Date::now(), js_sys::Math::random());
                    match event {
                        RollerTick::Highlight(id) => highlighted.set(Some(id)),
                        RollerTick::Finished(task) => {
                            if let Some(id) = roll_timer.borrow_mut().take() {
                                window.clear_interval_with_handle(id);
                            }
                            highlighted.set(None);
                            rolling.set(false);
                            active_task.set(Some(task));
                        }
                        RollerTick::Idle => {}
                    }
                }) as Box<dyn FnMut()>)
            };
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    FLICKER_INTERVAL_MS,
                )
                .unwrap();
            *roll_timer.borrow_mut() = Some(id);
            // Keep the closure alive as long as the interval runs.
            *roll_tick_cb.borrow_mut() = Some(tick);
        })
    };

    // Click on a map node: roll within that category (optionally narrowed
    // to one subcategory). Ignored mid-roll.
    let on_select_node = {
        let state = state.clone();
        let rolling = rolling.clone();
        let start_roll = start_roll.clone();
        Callback::from(move |(cat, sub): (CategoryId, Option<String>)| {
            if *rolling {
                return;
            }
            let pool: Vec<Task> = state
                .all_tasks()
                .into_iter()
                .filter(|t| {
                    t.category == cat && sub.as_ref().is_none_or(|s| &t.sub_category == s)
                })
                .collect();
            start_roll.emit(pool);
        })
    };

    let on_roll_all = {
        let state = state.clone();
        let start_roll = start_roll.clone();
        Callback::from(move |_: MouseEvent| {
            start_roll.emit(state.all_tasks());
        })
    };

    let on_confirm = {
        let state = state.clone();
        let active_task = active_task.clone();
        Callback::from(move |_| {
            if let Some(task) = (*active_task).clone() {
                let (dx, dy) =
                    layout::roll_label_offset(js_sys::Math::random(), js_sys::Math::random());
                state.dispatch(AppAction::Confirm {
                    task_id: task.id,
                    now_ms: js_sys::Date::now(),
                    dx,
                    dy,
                });
                active_task.set(None);
            }
        })
    };
    let on_cancel = {
        let active_task = active_task.clone();
        Callback::from(move |_| active_task.set(None))
    };

    let on_move_category = {
        let state = state.clone();
        Callback::from(move |(id, x, y): (CategoryId, f64, f64)| {
            state.dispatch(AppAction::MoveCategory { id, x, y });
        })
    };
    let on_adjust_count = {
        let state = state.clone();
        Callback::from(move |(task_id, delta): (String, i32)| {
            state.dispatch(AppAction::AdjustCount { task_id, delta });
        })
    };
    let on_add_task = {
        let state = state.clone();
        Callback::from(move |task: Task| state.dispatch(AppAction::AddTask(task)))
    };
    let on_add_category = {
        let state = state.clone();
        Callback::from(move |cat| state.dispatch(AppAction::AddCategory(cat)))
    };
    let on_update_category = {
        let state = state.clone();
        Callback::from(move |(id, name): (String, String)| {
            state.dispatch(AppAction::UpdateCategory { id, name });
        })
    };
    let on_update_task = {
        let state = state.clone();
        Callback::from(move |(id, patch): (String, TaskPatch)| {
            state.dispatch(AppAction::UpdateTask { id, patch });
        })
    };
    let on_delete_category = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(AppAction::DeleteCategory { id }))
    };
    let on_delete_task = {
        let state = state.clone();
        Callback::from(move |id: String| state.dispatch(AppAction::DeleteTask { id }))
    };
    let on_reset = {
        let state = state.clone();
        let reset_open = reset_open.clone();
        Callback::from(move |_| {
            state.dispatch(AppAction::ResetProgress);
            reset_open.set(false);
        })
    };

    let open_flag = |flag: &UseStateHandle<bool>, value: bool| {
        let flag = flag.clone();
        Callback::from(move |_: MouseEvent| flag.set(value))
    };
    let close_flag = |flag: &UseStateHandle<bool>| {
        let flag = flag.clone();
        Callback::from(move |_: ()| flag.set(false))
    };

    let all_categories = state.all_categories();
    let all_tasks = state.all_tasks();
    let active_category = (*active_task)
        .as_ref()
        .and_then(|t| all_categories.iter().find(|c| c.id == t.category).cloned());

    let tool_btn = "width:56px; height:56px; background:white; border:2px solid black; border-radius:16px; display:flex; align-items:center; justify-content:center; font-size:24px; box-shadow:4px 4px 0 0 rgba(0,0,0,1); cursor:pointer;";
    let dice_style = format!(
        "padding:20px 48px; background:#ffed4a; border:2px solid black; border-radius:40px 100px 40px 100px / 100px 40px 100px 40px; font-size:24px; font-weight:900; box-shadow:8px 8px 0 0 rgba(0,0,0,1); cursor:pointer; {}",
        if *rolling { "opacity:0.5;" } else { "" }
    );

    html! {
        <div style="min-height:100vh; position:relative; overflow:hidden; background:#fdfaf5;">
            { if *rolling {
                html! { <div style="position:fixed; inset:0; background:rgba(0,0,0,0.6); z-index:45; transition:opacity 500ms;" /> }
            } else {
                html! {}
            } }

            <div style="position:fixed; top:24px; left:50%; transform:translateX(-50%); z-index:40; text-align:center; pointer-events:none; user-select:none;">
                <div style="display:inline-block; padding:8px 24px; background:rgba(255,255,255,0.4); border-radius:9999px; border:1px solid rgba(0,0,0,0.05); box-shadow:0 1px 2px rgba(0,0,0,0.05);">
                    <p style="color:#6b7280; font-size:12px; letter-spacing:0.2em; margin:0;">
                        { "你是第 " }
                        <span style="font-weight:bold; color:#1f2937; font-size:18px; margin:0 4px;">{ state.visitor_count }</span>
                        { " 位丰容的人类" }
                    </p>
                </div>
            </div>

            <div style="position:fixed; top:24px; left:24px; z-index:50; display:flex; flex-direction:column; gap:16px;">
                <button title="成就馆" onclick={open_flag(&sidebar_open, true)} style={tool_btn}>{ "🏅" }</button>
                <button title="管理分类" onclick={open_flag(&edit_open, true)} style={tool_btn}>{ "⚙️" }</button>
                <button title="重新开始" onclick={open_flag(&reset_open, true)} style={tool_btn}>{ "🔄" }</button>
            </div>

            <MapCanvas
                completed_tasks={state.completed_tasks.clone()}
                all_tasks={all_tasks.clone()}
                categories={all_categories.clone()}
                category_positions={state.category_positions.clone()}
                highlighted={(*highlighted).clone()}
                on_select_node={on_select_node}
                on_move_category={on_move_category}
            />

            <div style="position:fixed; bottom:48px; left:50%; transform:translateX(-50%); display:flex; align-items:center; gap:24px; z-index:40;">
                <button onclick={on_roll_all} disabled={*rolling} style={dice_style}>
                    { if *rolling { "捕捉灵感中..." } else { "🎲 随机抽取" } }
                </button>
                <button
                    onclick={open_flag(&custom_open, true)}
                    style="width:64px; height:64px; background:white; border:2px solid black; border-radius:50%; display:flex; flex-direction:column; align-items:center; justify-content:center; box-shadow:0 10px 15px rgba(0,0,0,0.1); cursor:pointer;"
                >
                    <span style="font-size:24px;">{ "✍️" }</span>
                    <span style="font-size:10px; font-weight:bold;">{ "创造" }</span>
                </button>
            </div>

            <TaskModal
                task={(*active_task).clone()}
                category={active_category}
                on_confirm={on_confirm}
                on_cancel={on_cancel}
            />

            <AchievementSidebar
                open={*sidebar_open}
                on_close={close_flag(&sidebar_open)}
                completed_tasks={state.completed_tasks.clone()}
                all_tasks={all_tasks.clone()}
                categories={all_categories.clone()}
                on_adjust_count={on_adjust_count}
            />

            <CustomTaskOverlay
                open={*custom_open}
                on_close={close_flag(&custom_open)}
                categories={all_categories}
                on_add_task={on_add_task}
                on_add_category={on_add_category}
            />

            <EditCategoriesOverlay
                open={*edit_open}
                on_close={close_flag(&edit_open)}
                custom_categories={state.custom_categories.clone()}
                custom_tasks={state.custom_tasks.clone()}
                on_update_category={on_update_category}
                on_update_task={on_update_task}
                on_delete_category={on_delete_category}
                on_delete_task={on_delete_task}
            />

            <ResetConfirmModal
                open={*reset_open}
                on_close={close_flag(&reset_open)}
                on_confirm={on_reset}
            />
        </div>
    }
}
