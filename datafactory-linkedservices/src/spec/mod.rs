/*!
 * Model
*/

pub mod constants;
pub mod linked_service;
pub mod references;
pub mod resource;
pub mod secret;
