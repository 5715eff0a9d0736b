//! Route paths.

pub const GET_ROOT: &str = "/";

pub const POST_AUTH_LOGIN: &str = "/auth/login";
pub const POST_AUTH_REGISTER: &str = "/auth/register";
pub const POST_AUTH_REFRESH: &str = "/auth/refresh";
pub const POST_AUTH_LOGOUT: &str = "/auth/logout";
pub const GET_AUTH_ME: &str = "/auth/me";

pub const LISTS: &str = "/lists";
pub const LISTS_ID: &str = "/lists/{id}";
pub const LISTS_ID_TODOS: &str = "/lists/{id}/todos";
pub const TODOS_ID: &str = "/todos/{id}";
