mod user_list;
pub use user_list::UserList;

mod profile;
pub use profile::Profile;

mod redirect;
pub use redirect::{NotFound, Root};
