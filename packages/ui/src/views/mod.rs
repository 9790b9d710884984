mod user_list;
pub use user_list::UserListView;

mod profile;
pub use profile::ProfileView;
