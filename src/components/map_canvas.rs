use std::collections::HashMap;

use web_sys::HtmlElement;
use yew::prelude::*;

use crate::layout;
use crate::model::{Category, CategoryId, CompletionRecord, Point, Task};
use crate::state::Viewport;
use crate::util::truncate_label;

#[derive(Properties, PartialEq, Clone)]
pub struct MapCanvasProps {
    pub completed_tasks: Vec<CompletionRecord>,
    pub all_tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub category_positions: HashMap<CategoryId, Point>,
    /// Node id (category id or subcategory label) under the spotlight.
    pub highlighted: Option<String>,
    /// Click on a node: (category, optional subcategory filter).
    pub on_select_node: Callback<(CategoryId, Option<String>)>,
    /// Completed drag of a category node, in percentage space.
    pub on_move_category: Callback<(CategoryId, f64, f64)>,
}

#[derive(Clone, PartialEq)]
struct Dot {
    x: f64,
    y: f64,
    color: String,
    delay: f64,
    duration: f64,
}

/// Decorative "unopened task" dots drifting in the background.
fn background_dots(categories: &[Category]) -> Vec<Dot> {
    (0..50)
        .map(|i| Dot {
            x: js_sys::Math::random() * 100.0,
            y: js_sys::Math::random() * 100.0,
            color: categories
                .get(i % categories.len().max(1))
                .map(|c| c.color.clone())
                .unwrap_or_else(|| "#ffd700".to_string()),
            delay: js_sys::Math::random() * 5.0,
            duration: 8.0 + js_sys::Math::random() * 12.0,
        })
        .collect()
}

#[function_component(MapCanvas)]
pub fn map_canvas(props: &MapCanvasProps) -> Html {
    let viewport = use_state(Viewport::default);
    let container_ref = use_node_ref();
    let dots = {
        let categories = props.categories.clone();
        use_state(move || background_dots(&categories))
    };

    let on_wheel = {
        let viewport = viewport.clone();
        Callback::from(move |e: WheelEvent| {
            e.prevent_default();
            let mut vp = (*viewport).clone();
            vp.apply_wheel(e.delta_y());
            viewport.set(vp);
        })
    };

    // Press on empty canvas starts a pan; node presses stop propagation
    // before this fires.
    let on_canvas_down = {
        let viewport = viewport.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut vp = (*viewport).clone();
            vp.begin_press(None, js_sys::Date::now());
            viewport.set(vp);
        })
    };

    let on_canvas_move = {
        let viewport = viewport.clone();
        let container_ref = container_ref.clone();
        let categories = props.categories.clone();
        let on_move_category = props.on_move_category.clone();
        Callback::from(move |e: MouseEvent| {
            let vp = (*viewport).clone();
            if let Some(id) = vp.dragged_node.clone() {
                // Only category positions persist; subcategory nodes always
                // re-derive from their deterministic offsets.
                if !categories.iter().any(|c| c.id == id) {
                    return;
                }
                if let Some(el) = container_ref.cast::<HtmlElement>() {
                    let rect = el.get_bounding_client_rect();
                    let (x, y) = vp.to_percent(
                        e.client_x() as f64 - rect.left(),
                        e.client_y() as f64 - rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    on_move_category.emit((id, x, y));
                }
            } else if vp.panning {
                let mut vp = vp;
                vp.pan_by(e.movement_x() as f64, e.movement_y() as f64);
                viewport.set(vp);
            }
        })
    };

    let end_press = {
        let viewport = viewport.clone();
        Callback::from(move |_e: MouseEvent| {
            let mut vp = (*viewport).clone();
            vp.end_press();
            viewport.set(vp);
        })
    };

    let node_down = |id: String| {
        let viewport = viewport.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut vp = (*viewport).clone();
            vp.begin_press(Some(id.clone()), js_sys::Date::now());
            viewport.set(vp);
        })
    };

    let node_up = |cat: CategoryId, sub: Option<String>| {
        let viewport = viewport.clone();
        let on_select_node = props.on_select_node.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut vp = (*viewport).clone();
            if vp.is_click(js_sys::Date::now()) {
                on_select_node.emit((cat.clone(), sub.clone()));
            }
            vp.end_press();
            viewport.set(vp);
        })
    };

    let subs = layout::sub_nodes(
        &props.categories,
        &props.all_tasks,
        &props.category_positions,
        &props.completed_tasks,
    );

    // Spotlight follows the highlighted node: categories resolve through
    // their overrides/defaults, anything else matches a subcategory label.
    let spotlight = props.highlighted.as_ref().and_then(|id| {
        props
            .categories
            .iter()
            .find(|c| c.id == *id)
            .map(|c| layout::category_position(&props.category_positions, c))
            .or_else(|| subs.iter().find(|n| n.name == *id).map(|n| n.pos))
    });

    // Completed records joined against the catalog; dangling records are
    // skipped rather than treated as errors.
    let labelled: Vec<(&CompletionRecord, &Task, Point, Point)> = props
        .completed_tasks
        .iter()
        .filter_map(|rec| {
            let task = props.all_tasks.iter().find(|t| t.id == rec.task_id)?;
            let (parent, label) = layout::record_position(
                rec,
                task,
                &subs,
                &props.categories,
                &props.category_positions,
            );
            Some((rec, task, parent, label))
        })
        .collect();

    let vp = (*viewport).clone();
    let surface_style = format!(
        "position:absolute; inset:0; transform:translate({}px, {}px) scale({}); transform-origin:center; transition:transform 75ms ease-out;",
        vp.offset_x, vp.offset_y, vp.zoom
    );

    html! {
        <div
            ref={container_ref}
            style="position:relative; width:100%; height:100vh; overflow:hidden; background:#fdfaf5; cursor:grab;"
            onwheel={on_wheel}
            onmousedown={on_canvas_down}
            onmousemove={on_canvas_move}
            onmouseup={end_press.clone()}
            onmouseleave={end_press}
        >
            <div style={surface_style}>
                { for dots.iter().enumerate().map(|(i, dot)| html! {
                    <div
                        key={i}
                        class="drift-animation"
                        style={format!(
                            "position:absolute; left:{}%; top:{}%; width:12px; height:12px; border-radius:50%; opacity:0.6; background-color:{}; box-shadow:0 0 8px rgba(255,255,255,0.8); animation-delay:-{}s; animation-duration:{}s;",
                            dot.x, dot.y, dot.color, dot.delay, dot.duration
                        )}
                    />
                }) }

                <svg
                    style="position:absolute; inset:0; width:100%; height:100%; pointer-events:none;"
                    viewBox="0 0 100 100"
                    preserveAspectRatio="none"
                >
                    // Hub-to-category and category-to-subcategory links.
                    { for props.categories.iter().map(|cat| {
                        let pos = layout::category_position(&props.category_positions, cat);
                        let cat_active = layout::node_active(
                            &props.completed_tasks, &props.all_tasks, &cat.id, None);
                        html! {
                            <g key={format!("lines-{}", cat.id)}>
                                <line
                                    x1="50" y1="50"
                                    x2={pos.x.to_string()} y2={pos.y.to_string()}
                                    stroke="black" stroke-width="0.15" stroke-dasharray="1,2"
                                    opacity={if cat_active { "0.3" } else { "0.1" }}
                                />
                                { for subs.iter().filter(|n| n.cat_id == cat.id).map(|sub| html! {
                                    <line
                                        key={sub.name.clone()}
                                        x1={pos.x.to_string()} y1={pos.y.to_string()}
                                        x2={sub.pos.x.to_string()} y2={sub.pos.y.to_string()}
                                        stroke="black" stroke-width="0.1"
                                        opacity={if sub.active { "0.2" } else { "0.05" }}
                                    />
                                }) }
                            </g>
                        }
                    }) }

                    // Curved links from parent nodes out to completed-task labels.
                    { for labelled.iter().enumerate().map(|(i, (_rec, task, parent, label))| {
                        let color = props.categories.iter()
                            .find(|c| c.id == task.category)
                            .map(|c| c.color.clone())
                            .unwrap_or_else(|| "#ccc".to_string());
                        html! {
                            <g key={format!("complete-{i}")}>
                                <path
                                    d={format!(
                                        "M {} {} Q {} {} {} {}",
                                        parent.x, parent.y,
                                        (parent.x + label.x) / 2.0, (parent.y + label.y) / 2.0,
                                        label.x, label.y
                                    )}
                                    stroke={color.clone()} stroke-width="0.2" fill="none" opacity="0.5"
                                />
                                <circle cx={label.x.to_string()} cy={label.y.to_string()} r="0.4" fill={color} />
                            </g>
                        }
                    }) }
                </svg>

                // Center hub.
                <div class="planetary-slow" style="position:absolute; left:50%; top:50%; transform:translate(-50%,-50%); z-index:20;">
                    <div class="hand-drawn" style="background:white; border:4px solid black; padding:16px; border-radius:50%; width:112px; height:112px; display:flex; align-items:center; justify-content:center; text-align:center; box-shadow:0 10px 25px rgba(0,0,0,0.15);">
                        <span style="font-size:20px; font-weight:bold; line-height:1.2;">{"人类"}<br/>{"丰容"}</span>
                    </div>
                </div>

                // Category nodes: draggable, click to roll within the category.
                { for props.categories.iter().enumerate().map(|(i, cat)| {
                    let pos = layout::category_position(&props.category_positions, cat);
                    html! {
                        <div
                            key={cat.id.clone()}
                            class="planetary"
                            onmousedown={node_down(cat.id.clone())}
                            onmouseup={node_up(cat.id.clone(), None)}
                            style={format!(
                                "position:absolute; left:{}%; top:{}%; transform:translate(-50%,-50%); z-index:10; cursor:pointer; animation-delay:{}s; animation-duration:{}s;",
                                pos.x, pos.y, i as f64 * 0.4, 6 + (i % 3)
                            )}
                        >
                            <div class="hand-drawn" style={format!(
                                "background-color:{}CC; border:2px solid black; padding:12px 20px; border-radius:12px; box-shadow:0 4px 6px rgba(0,0,0,0.15); text-align:center;",
                                cat.color
                            )}>
                                <div style="font-size:24px; margin-bottom:4px; pointer-events:none;">{ &cat.icon }</div>
                                <div style="font-size:14px; font-weight:bold; white-space:nowrap; pointer-events:none;">{ &cat.name }</div>
                            </div>
                        </div>
                    }
                }) }

                // Subcategory nodes: grayed out until something completes in them.
                { for subs.iter().enumerate().map(|(i, sub)| {
                    let look = if sub.active {
                        "opacity:1; filter:grayscale(0);"
                    } else {
                        "opacity:0.4; filter:grayscale(80%);"
                    };
                    html! {
                        <div
                            key={sub.name.clone()}
                            class="planetary-fast"
                            onmousedown={node_down(sub.name.clone())}
                            onmouseup={node_up(sub.cat_id.clone(), Some(sub.name.clone()))}
                            style={format!(
                                "position:absolute; left:{}%; top:{}%; transform:translate(-50%,-50%); z-index:10; cursor:pointer; transition:opacity 700ms, filter 700ms; {} animation-delay:{}s; animation-duration:{}s;",
                                sub.pos.x, sub.pos.y, look, i as f64 * 0.2, 4 + (i % 2)
                            )}
                        >
                            <div class="hand-drawn" style="background:white; border:2px solid rgba(0,0,0,0.4); padding:6px 12px; border-radius:8px; font-size:13px; font-weight:bold; color:#374151; box-shadow:0 1px 2px rgba(0,0,0,0.1); white-space:nowrap;">
                                { &sub.name }
                            </div>
                        </div>
                    }
                }) }

                // Completed-task labels, pinned by their fixed offsets.
                { for labelled.iter().enumerate().map(|(i, (_rec, task, _parent, label))| html! {
                    <div
                        key={format!("label-{i}")}
                        class="planetary-slowest"
                        style={format!(
                            "position:absolute; left:{}%; top:{}%; transform:translate(-50%,-50%); z-index:40; pointer-events:none; animation-delay:{}s; animation-duration:{}s;",
                            label.x, label.y, i as f64 * 0.5, 15 + (i % 10)
                        )}
                    >
                        <span style="font-size:10px; color:#374151; font-weight:bold; white-space:nowrap; background:rgba(255,255,255,0.95); padding:6px 12px; border-radius:9999px; border:2px solid rgba(0,0,0,0.1); box-shadow:0 2px 10px rgba(0,0,0,0.1);">
                            { truncate_label(&task.content, 18) }
                        </span>
                    </div>
                }) }

                { if let Some(pos) = spotlight {
                    html! {
                        <div style={format!(
                            "position:absolute; left:{}%; top:{}%; width:130px; height:130px; transform:translate(-50%,-50%); border:4px dashed #ffeb3b; border-radius:50%; box-shadow:0 0 50px rgba(255,235,59,0.6); z-index:50; pointer-events:none; transition:all 150ms ease-out;",
                            pos.x, pos.y
                        )} />
                    }
                } else {
                    html! {}
                } }
            </div>
        </div>
    }
}
