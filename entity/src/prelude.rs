pub use super::player::Entity as Player;
