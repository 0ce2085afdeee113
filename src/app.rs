use leptos::html::Dialog;
use leptos::prelude::*;
use uuid::Uuid;

use crate::board::{DragState, TaskBoard};
use crate::components::{AddTaskModal, EditTaskModal, TaskCard, TaskColumn, ViewTaskModal};
use crate::models::{Task, TaskDraft, TimeOfDay};

#[component]
pub fn App() -> impl IntoView {
    // The board aggregate owns every task; all mutations funnel through it
    // and the columns re-render reactively from this one signal.
    let board = RwSignal::new(TaskBoard::new());

    // Active-drag marker, shared between the cards (dragstart/dragend) and
    // the columns (drop).
    let drag = RwSignal::new(DragState::Idle);

    // Transient dialog selections; None is the first-class "nothing selected"
    let (viewing_task, set_viewing_task) = signal::<Option<Task>>(None);
    let (editing_task, set_editing_task) = signal::<Option<Task>>(None);

    // References to the HTML dialog elements so we can open and close them
    // programmatically from Rust
    let add_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let edit_dialog_ref: NodeRef<Dialog> = NodeRef::new();
    let view_dialog_ref: NodeRef<Dialog> = NodeRef::new();

    let open_add_modal = move |_| {
        if let Some(dialog) = add_dialog_ref.get() {
            let _ = dialog.show_modal();
        }
    };

    let create_task = Box::new(move |draft: TaskDraft| {
        board.update(|board| {
            board.add_task(draft);
        });
    }) as Box<dyn Fn(TaskDraft) + 'static>;

    let save_task = Box::new(move |id: Uuid, draft: TaskDraft| {
        board.update(|board| board.edit_task(id, draft));
    }) as Box<dyn Fn(Uuid, TaskDraft) + 'static>;

    let dismiss_edit = Box::new(move || set_editing_task.set(None)) as Box<dyn Fn() + 'static>;
    let dismiss_view = Box::new(move || set_viewing_task.set(None)) as Box<dyn Fn() + 'static>;

    view! {
        <div class="board-page">
            <header class="board-header">
                <div>
                    <h1>"Daily Tasks"</h1>
                    <p class="board-summary">
                        {move || {
                            board
                                .with(|board| {
                                    format!(
                                        "{} of {} completed",
                                        board.completed_count(),
                                        board.len(),
                                    )
                                })
                        }}
                    </p>
                </div>
                <button class="btn-primary" on:click=open_add_modal>"Add Task"</button>
            </header>

            <div class="board-columns">
                {TimeOfDay::all()
                    .into_iter()
                    .map(|column| {
                        view! {
                            <TaskColumn column=column board=board drag=drag>
                                // Reactive card list - re-renders when the board changes
                                {move || {
                                    board
                                        .with(|board| board.tasks_by_column(column))
                                        .into_iter()
                                        .map(|task| {
                                            let on_view = Box::new(move |task: Task| {
                                                set_viewing_task.set(Some(task));
                                            }) as Box<dyn Fn(Task) + 'static>;
                                            let on_edit = Box::new(move |task: Task| {
                                                set_editing_task.set(Some(task));
                                            }) as Box<dyn Fn(Task) + 'static>;

                                            view! {
                                                <TaskCard
                                                    task=task
                                                    board=board
                                                    drag=drag
                                                    on_view=on_view
                                                    on_edit=on_edit
                                                />
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                }}
                            </TaskColumn>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <AddTaskModal on_create=create_task dialog_ref=add_dialog_ref />

            <EditTaskModal
                editing=editing_task
                on_save=save_task
                on_dismiss=dismiss_edit
                dialog_ref=edit_dialog_ref
            />

            <ViewTaskModal
                viewing=viewing_task
                on_dismiss=dismiss_view
                dialog_ref=view_dialog_ref
            />
        </div>
    }
}
