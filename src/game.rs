mod bimatrix_game;
pub use self::bimatrix_game::*;

mod label;
pub use self::label::*;

mod tableau;
pub use self::tableau::*;

mod lemke_howson;
pub use self::lemke_howson::*;

mod equilibrium;
pub use self::equilibrium::*;

mod enumerator;
pub use self::enumerator::*;

mod game_error;
pub use game_error::GameError;
