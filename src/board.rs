use uuid::Uuid;

use crate::models::{Task, TaskDraft, TimeOfDay};

/// Owns the task collection and every mutation the UI can perform on it.
///
/// The backing `Vec` is kept in insertion order, which is also the canonical
/// within-column order: a column is a stable filter over the sequence, never
/// a re-sort. Operations referencing an id that is no longer present (a
/// stale id after a delete) are benign no-ops rather than errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new task built from the form payload and returns its id.
    /// New tasks always start incomplete.
    pub fn add_task(&mut self, draft: TaskDraft) -> Uuid {
        let task = Task::new(draft);
        let id = task.id;
        self.tasks.push(task);
        id
    }

    /// Replaces the mutable fields of the matching task in place. `id` and
    /// `completed` survive an edit untouched.
    pub fn edit_task(&mut self, id: Uuid, draft: TaskDraft) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply(draft);
        }
    }

    pub fn toggle_complete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.completed = !task.completed;
        }
    }

    pub fn delete_task(&mut self, id: Uuid) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Moves a task to another column. Returns whether anything changed: a
    /// drop on the task's current column (or a stale id) leaves the board
    /// untouched. The task keeps its position in the backing sequence, so a
    /// moved task slots into its new column by original insertion order
    /// rather than being appended at the end.
    pub fn reassign_column(&mut self, id: Uuid, column: TimeOfDay) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) if task.time_of_day != column => {
                task.time_of_day = column;
                true
            }
            _ => false,
        }
    }

    /// The tasks belonging to one column, in insertion order.
    pub fn tasks_by_column(&self, column: TimeOfDay) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|t| t.time_of_day == column)
            .cloned()
            .collect()
    }

    pub fn column_count(&self, column: TimeOfDay) -> usize {
        self.tasks.iter().filter(|t| t.time_of_day == column).count()
    }

    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}

/// The drag-and-drop interaction reduced to its two states. A card's
/// `dragstart` begins a drag, a column's `drop` settles it, and `dragend`
/// clears whatever is left (covering drops outside any column and Escape).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Uuid),
}

impl DragState {
    pub fn begin(&mut self, id: Uuid) {
        *self = DragState::Dragging(id);
    }

    /// The task currently being dragged, if any.
    pub fn active_task(&self) -> Option<Uuid> {
        match self {
            DragState::Idle => None,
            DragState::Dragging(id) => Some(*id),
        }
    }

    /// Ends the drag and hands back the task it carried, so a drop handler
    /// can reassign exactly once. Settling an idle state yields `None`.
    pub fn settle(&mut self) -> Option<Uuid> {
        let active = self.active_task();
        *self = DragState::Idle;
        active
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn draft(title: &str, column: TimeOfDay) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            time_of_day: column,
            priority: Priority::Medium,
            notes: None,
        }
    }

    #[test]
    fn add_task_appends_an_incomplete_task_with_a_fresh_id() {
        let mut board = TaskBoard::new();
        let first = board.add_task(draft("Coffee", TimeOfDay::Morning));
        assert_eq!(board.len(), 1);

        let second = board.add_task(draft("More coffee", TimeOfDay::Morning));
        assert_eq!(board.len(), 2);
        assert_ne!(first, second);

        let task = board.get(second).unwrap();
        assert!(!task.completed);
        assert_eq!(task.title, "More coffee");
    }

    #[test]
    fn columns_partition_the_board_in_insertion_order() {
        let mut board = TaskBoard::new();
        let a = board.add_task(draft("A", TimeOfDay::Morning));
        let b = board.add_task(draft("B", TimeOfDay::Evening));
        let c = board.add_task(draft("C", TimeOfDay::Morning));

        let morning = board.tasks_by_column(TimeOfDay::Morning);
        let afternoon = board.tasks_by_column(TimeOfDay::Afternoon);
        let evening = board.tasks_by_column(TimeOfDay::Evening);

        assert_eq!(
            morning.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![a, c]
        );
        assert!(afternoon.is_empty());
        assert_eq!(evening.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
        assert_eq!(morning.len() + afternoon.len() + evening.len(), board.len());
    }

    #[test]
    fn toggling_twice_restores_the_original_state() {
        let mut board = TaskBoard::new();
        let id = board.add_task(draft("Lunch", TimeOfDay::Afternoon));

        board.toggle_complete(id);
        assert!(board.get(id).unwrap().completed);
        assert_eq!(board.completed_count(), 1);

        board.toggle_complete(id);
        assert!(!board.get(id).unwrap().completed);
        assert_eq!(board.completed_count(), 0);
    }

    #[test]
    fn toggle_on_a_stale_id_is_a_no_op() {
        let mut board = TaskBoard::new();
        board.add_task(draft("Lunch", TimeOfDay::Afternoon));
        let before = board.clone();

        board.toggle_complete(Uuid::new_v4());
        assert_eq!(board, before);
    }

    #[test]
    fn delete_removes_the_task_from_every_column_query() {
        let mut board = TaskBoard::new();
        let id = board.add_task(draft("Gym", TimeOfDay::Evening));
        board.add_task(draft("Read", TimeOfDay::Evening));

        board.delete_task(id);
        assert_eq!(board.len(), 1);
        for column in TimeOfDay::all() {
            assert!(board.tasks_by_column(column).iter().all(|t| t.id != id));
        }
    }

    #[test]
    fn deleting_a_stale_id_leaves_the_board_unchanged() {
        let mut board = TaskBoard::new();
        board.add_task(draft("Gym", TimeOfDay::Evening));
        let before = board.clone();

        board.delete_task(Uuid::new_v4());
        assert_eq!(board, before);
    }

    #[test]
    fn reassigning_to_the_same_column_changes_nothing() {
        let mut board = TaskBoard::new();
        let id = board.add_task(draft("Walk", TimeOfDay::Morning));
        let before = board.clone();

        assert!(!board.reassign_column(id, TimeOfDay::Morning));
        assert_eq!(board, before);
    }

    #[test]
    fn reassigning_moves_only_the_column_field() {
        let mut board = TaskBoard::new();
        let id = board.add_task(TaskDraft {
            title: "Walk".to_string(),
            time_of_day: TimeOfDay::Morning,
            priority: Priority::High,
            notes: Some("around the block".to_string()),
        });
        board.toggle_complete(id);

        assert!(board.reassign_column(id, TimeOfDay::Evening));
        assert!(board.tasks_by_column(TimeOfDay::Morning).is_empty());

        let moved = board.get(id).unwrap();
        assert_eq!(moved.time_of_day, TimeOfDay::Evening);
        assert_eq!(moved.title, "Walk");
        assert_eq!(moved.priority, Priority::High);
        assert_eq!(moved.notes.as_deref(), Some("around the block"));
        assert!(moved.completed);
    }

    #[test]
    fn reassign_on_a_stale_id_is_a_no_op() {
        let mut board = TaskBoard::new();
        board.add_task(draft("Walk", TimeOfDay::Morning));
        let before = board.clone();

        assert!(!board.reassign_column(Uuid::new_v4(), TimeOfDay::Evening));
        assert_eq!(board, before);
    }

    // Pins the cross-column ordering decision: a moved task keeps its
    // position in the backing sequence instead of being appended, so B
    // (inserted before C) lands ahead of C in the evening column.
    #[test]
    fn moved_task_keeps_its_original_insertion_position() {
        let mut board = TaskBoard::new();
        let a = board.add_task(draft("A", TimeOfDay::Morning));
        let b = board.add_task(draft("B", TimeOfDay::Morning));
        let c = board.add_task(draft("C", TimeOfDay::Evening));

        assert!(board.reassign_column(b, TimeOfDay::Evening));

        let morning: Vec<_> = board
            .tasks_by_column(TimeOfDay::Morning)
            .iter()
            .map(|t| t.id)
            .collect();
        let evening: Vec<_> = board
            .tasks_by_column(TimeOfDay::Evening)
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(morning, vec![a]);
        assert_eq!(evening, vec![b, c]);
    }

    #[test]
    fn editing_a_stale_id_leaves_the_board_unchanged() {
        let mut board = TaskBoard::new();
        board.add_task(draft("Journal", TimeOfDay::Evening));
        let before = board.clone();

        board.edit_task(
            Uuid::new_v4(),
            TaskDraft {
                title: "X".to_string(),
                time_of_day: TimeOfDay::Evening,
                priority: Priority::High,
                notes: None,
            },
        );
        assert_eq!(board, before);
    }

    #[test]
    fn edit_replaces_mutable_fields_and_keeps_completion() {
        let mut board = TaskBoard::new();
        let id = board.add_task(draft("Journal", TimeOfDay::Evening));
        board.toggle_complete(id);

        board.edit_task(
            id,
            TaskDraft {
                title: "Journal & plan tomorrow".to_string(),
                time_of_day: TimeOfDay::Morning,
                priority: Priority::Low,
                notes: Some("five minutes".to_string()),
            },
        );

        let task = board.get(id).unwrap();
        assert_eq!(task.title, "Journal & plan tomorrow");
        assert_eq!(task.time_of_day, TimeOfDay::Morning);
        assert_eq!(task.priority, Priority::Low);
        assert!(task.completed);
    }

    #[test]
    fn drag_settles_once_and_cancels_cleanly() {
        let id = Uuid::new_v4();
        let mut drag = DragState::default();
        assert_eq!(drag.active_task(), None);

        drag.begin(id);
        assert_eq!(drag.active_task(), Some(id));

        // A drop consumes the active task; the trailing dragend sees Idle.
        assert_eq!(drag.settle(), Some(id));
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.settle(), None);

        // A cancelled drag mutates nothing and just clears the marker.
        drag.begin(id);
        drag.cancel();
        assert_eq!(drag.active_task(), None);
    }
}
