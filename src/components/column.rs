use leptos::prelude::*;
use web_sys::DragEvent;

use crate::board::{DragState, TaskBoard};
use crate::models::TimeOfDay;

#[component]
pub fn TaskColumn(
    column: TimeOfDay,
    board: RwSignal<TaskBoard>,
    drag: RwSignal<DragState>,
    children: Children,
) -> impl IntoView {
    // Local highlight while a card is dragged over this column
    let (drag_over, set_drag_over) = signal(false);

    let accept_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        // The drag marker is the source of truth for which task is active;
        // settle it so the trailing dragend sees an already-idle state.
        let mut state = drag.get_untracked();
        let settled = state.settle();
        drag.set(state);

        let Some(id) = settled else {
            web_sys::console::log_1(&"drop ignored: no active drag".into());
            return;
        };

        board.update(|board| {
            if board.reassign_column(id, column) {
                web_sys::console::log_1(
                    &format!("task {} moved to {}", id, column.label()).into(),
                );
            }
        });
    };

    view! {
        <div class="board-column">
            <div class="column-header">
                <h2>
                    <span class="column-icon">{column.icon()}</span>
                    {column.label()}
                </h2>
                // Reactive task count - updates automatically when the board changes
                <span class="task-count">
                    {move || {
                        board.with(|board| {
                            let count = board.column_count(column);
                            format!("{} task{}", count, if count == 1 { "" } else { "s" })
                        })
                    }}
                </span>
            </div>
            <div
                class="column-content"
                class:drag-over=move || drag_over.get()
                // dragover must be cancelled for the column to accept drops
                on:dragover=move |ev: DragEvent| ev.prevent_default()
                on:dragenter=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_over.set(true);
                }
                on:dragleave=move |_| set_drag_over.set(false)
                on:drop=accept_drop
            >
                {children()}
            </div>
        </div>
    }
}
