use leptos::html::Dialog;
use leptos::prelude::*;

use crate::models::Task;

/// Read-only task detail dialog, opened by clicking a card body.
#[component]
pub fn ViewTaskModal(
    #[prop(into)] viewing: ReadSignal<Option<Task>>,
    #[prop(into)] on_dismiss: Box<dyn Fn() + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    // Open the dialog whenever a view selection appears
    Effect::new(move |_| {
        if viewing.get().is_some() {
            if let Some(dialog) = dialog_ref.get() {
                let _ = dialog.show_modal();
            }
        }
    });

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal" on:close=move |_| on_dismiss()>
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Task Details"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                {move || {
                    viewing
                        .get()
                        .map(|task| {
                            view! {
                                <div class="task-details">
                                    <div class="detail-group">
                                        <h4>"Title"</h4>
                                        <p>{task.title.clone()}</p>
                                    </div>
                                    <div class="detail-group">
                                        <h4>"Time of Day"</h4>
                                        <p>{task.time_of_day.label()}</p>
                                    </div>
                                    <div class="detail-group">
                                        <h4>"Priority"</h4>
                                        <span class=task.priority.badge_class()>
                                            {task.priority.as_str()}
                                        </span>
                                    </div>
                                    <div class="detail-group">
                                        <h4>"Status"</h4>
                                        <span class="status-badge">
                                            {if task.completed { "Completed" } else { "Pending" }}
                                        </span>
                                    </div>
                                    {task
                                        .notes
                                        .clone()
                                        .map(|notes| {
                                            view! {
                                                <div class="detail-group">
                                                    <h4>"Notes"</h4>
                                                    <p class="detail-notes">{notes}</p>
                                                </div>
                                            }
                                        })}
                                    <div class="detail-group">
                                        <h4>"Created"</h4>
                                        <p>
                                            {task.created_at.format("%Y-%m-%d %H:%M UTC").to_string()}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>
        </dialog>
    }
}
