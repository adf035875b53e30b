// server/src/web/handlers/mod.rs

// Mutations: newUser, updateUser, deleteUser
pub mod user_handlers;
// Reads: allUsers, getUserInfo, getUsers, getSkillsFreq
pub mod query_handlers;
