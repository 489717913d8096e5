//! View-models
//!
//! Framework-free screen state that drives a [`TaskService`]. A UI binds to
//! these and renders their fields; the view-models translate service errors
//! into user-facing messages.
//!
//! [`TaskService`]: crate::task::TaskService

mod create;
mod detail;
mod list;

pub use create::TaskCreateViewModel;
pub use detail::TaskDetailViewModel;
pub use list::TaskListViewModel;

pub const MSG_LOAD_TASKS_FAILED: &str = "Erro ao carregar as tarefas";
pub const MSG_LOAD_TASK_FAILED: &str = "Erro ao carregar a tarefa";
pub const MSG_DELETE_FAILED: &str = "Erro ao deletar a tarefa";
pub const MSG_TOGGLE_FAILED: &str = "Erro ao alterar status da tarefa";
pub const MSG_UPDATE_FAILED: &str = "Erro ao atualizar a tarefa";
pub const MSG_NO_TASK_LOADED: &str = "Nenhuma tarefa carregada";
pub const MSG_FORM_INCOMPLETE: &str = "Informe título e descrição.";

/// Whether both form fields have text after trimming
fn form_is_complete(title: &str, description: &str) -> bool {
    !title.trim().is_empty() && !description.trim().is_empty()
}
