pub mod enclave;
pub mod etp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque},
            ops::Add
        };
    }
}

pub mod prelude {
    pub use super::enclave::prelude::*;
    pub use super::etp_server::*;
    pub use super::utils::prelude::*;
}
