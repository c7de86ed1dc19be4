mod handlers;
mod member;
mod target;
