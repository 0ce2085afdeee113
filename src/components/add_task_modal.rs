use leptos::html::Dialog;
use leptos::prelude::*;
use leptos::ev;

use crate::models::{Priority, TaskDraft, TimeOfDay};

#[component]
pub fn AddTaskModal(
    #[prop(into)] on_create: Box<dyn Fn(TaskDraft) + 'static>,
    dialog_ref: NodeRef<Dialog>,
) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (time_of_day, set_time_of_day) = signal(TimeOfDay::Morning);
    let (priority, set_priority) = signal(Priority::Low);
    let (notes, set_notes) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        let draft = TaskDraft::from_form(
            title.get_untracked(),
            time_of_day.get_untracked(),
            priority.get_untracked(),
            notes.get_untracked(),
        );
        on_create(draft);

        // Reset the form to its defaults for the next task
        set_title.set(String::new());
        set_time_of_day.set(TimeOfDay::Morning);
        set_priority.set(Priority::Low);
        set_notes.set(String::new());

        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    let close_modal = move |_| {
        if let Some(dialog) = dialog_ref.get() {
            dialog.close();
        }
    };

    view! {
        <dialog node_ref=dialog_ref class="task-modal">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>"Add New Task"</h3>
                    <button type="button" class="modal-close" on:click=close_modal>"×"</button>
                </div>
                <form on:submit=handle_submit>
                    <div class="form-group">
                        <label>"Task Title"</label>
                        <input
                            type="text"
                            placeholder="Enter task title"
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            prop:value=move || title.get()
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label>"Time of Day"</label>
                        <select
                            prop:value=move || time_of_day.get().as_str()
                            on:change=move |ev| {
                                if let Some(column) = TimeOfDay::parse(&event_target_value(&ev)) {
                                    set_time_of_day.set(column);
                                }
                            }
                        >
                            {TimeOfDay::all()
                                .into_iter()
                                .map(|option| {
                                    view! { <option value=option.as_str()>{option.label()}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Priority"</label>
                        <select
                            prop:value=move || priority.get().as_str()
                            on:change=move |ev| {
                                if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                                    set_priority.set(priority);
                                }
                            }
                        >
                            {Priority::all()
                                .into_iter()
                                .map(|option| {
                                    view! { <option value=option.as_str()>{option.as_str()}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Notes (Optional)"</label>
                        <textarea
                            placeholder="Add any additional notes"
                            rows="4"
                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                            prop:value=move || notes.get()
                        ></textarea>
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=close_modal>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary">"Add Task"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
