mod home;
pub use home::Home;

mod role_gate;
pub use role_gate::RoleGate;

mod projects;
pub use projects::Projects;

mod users;
pub use users::Users;

mod processes;
pub use processes::Processes;
