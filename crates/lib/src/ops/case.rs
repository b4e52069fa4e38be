//! Key casing conversion for whole containers.

use tracing::trace;

use crate::{
    casing::{self, KeyCase},
    container::{Container, Key},
};

/// Rewrites every string key in `case`. Integer keys are left alone.
///
/// A converted key that reads as a canonical integer (`"_5"` becomes `"5"`)
/// is stored as an integer key.
///
/// Keys that collapse onto the same converted form keep the position of the
/// first and the value of the last.
pub fn convert_keys(container: &Container, case: KeyCase) -> Container {
    trace!(%case, len = container.len(), "Converting key case");
    container
        .iter()
        .map(|(key, value)| {
            let key = match key {
                Key::Str(s) => Key::parse(casing::convert(s, case)),
                Key::Int(_) => key.clone(),
            };
            (key, value.clone())
        })
        .collect()
}

/// `user_id` → `userId`
pub fn keys_to_camel_case(container: &Container) -> Container {
    convert_keys(container, KeyCase::Camel)
}

/// `user_id` → `UserId`
pub fn keys_to_pascal_case(container: &Container) -> Container {
    convert_keys(container, KeyCase::Pascal)
}

/// `userId` → `user_id`
pub fn keys_to_snake_case(container: &Container) -> Container {
    convert_keys(container, KeyCase::Snake)
}

/// `userId` → `user-id`
pub fn keys_to_kebab_case(container: &Container) -> Container {
    convert_keys(container, KeyCase::Kebab)
}

/// `userId` → `USER_ID`
pub fn keys_to_scream_snake_case(container: &Container) -> Container {
    convert_keys(container, KeyCase::ScreamSnake)
}

/// `userId` → `USER-ID`
pub fn keys_to_scream_kebab_case(container: &Container) -> Container {
    convert_keys(container, KeyCase::ScreamKebab)
}
