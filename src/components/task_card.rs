use leptos::prelude::*;
use web_sys::DragEvent;

use crate::board::{DragState, TaskBoard};
use crate::models::Task;

#[component]
pub fn TaskCard(
    task: Task,
    board: RwSignal<TaskBoard>,
    drag: RwSignal<DragState>,
    #[prop(into)] on_view: Box<dyn Fn(Task) + 'static>,
    #[prop(into)] on_edit: Box<dyn Fn(Task) + 'static>,
) -> impl IntoView {
    let task_id = task.id;
    let task_for_view = task.clone();
    let task_for_edit = task.clone();

    let begin_drag = move |ev: DragEvent| {
        // Firefox refuses to start a drag without data on the event; the id
        // rides along even though the drop handler reads the drag marker.
        if let Some(transfer) = ev.data_transfer() {
            let _ = transfer.set_data("text/plain", &task_id.to_string());
            transfer.set_effect_allowed("move");
        }
        drag.update(|drag| drag.begin(task_id));
    };

    // dragend fires on the source card after every gesture: after a drop the
    // marker is already idle, and a drag that ended outside any column (or
    // was cancelled with Escape) gets cleared here without touching a task.
    let end_drag = move |_| {
        drag.update(|drag| drag.cancel());
    };

    view! {
        <div
            class="task-card"
            class:completed=task.completed
            class:dragging=move || drag.get().active_task() == Some(task_id)
            // Clicking the card body opens the read-only detail view. The
            // checkbox, action buttons and drag handle stop propagation so
            // they never double as a view click.
            on:click=move |_| on_view(task_for_view.clone())
        >
            <div class="task-card-top">
                <div
                    class="drag-handle"
                    draggable="true"
                    title="Drag to another column"
                    on:click=move |ev| ev.stop_propagation()
                    on:dragstart=begin_drag
                    on:dragend=end_drag
                >
                    "⠿"
                </div>
                <input
                    type="checkbox"
                    class="task-checkbox"
                    prop:checked=task.completed
                    on:click=move |ev| ev.stop_propagation()
                    on:change=move |_| {
                        board.update(|board| board.toggle_complete(task_id));
                    }
                />
                <span class=task.priority.badge_class()>{task.priority.as_str()}</span>
                <h4 class="task-title">{task.title.clone()}</h4>
                <div class="task-actions">
                    <button
                        class="task-action-btn edit-btn"
                        title="Edit task"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            on_edit(task_for_edit.clone());
                        }
                    >
                        "✎"
                    </button>
                    <button
                        class="task-action-btn delete-btn"
                        title="Delete task"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            board.update(|board| board.delete_task(task_id));
                        }
                    >
                        "🗑"
                    </button>
                </div>
            </div>
            {task.notes.clone().map(|notes| view! { <p class="task-notes">{notes}</p> })}
        </div>
    }
}
