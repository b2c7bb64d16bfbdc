// Crate-internal.
// ---

pub(crate) mod data {
    pub(crate) mod models {
        pub(crate) mod balance_change_config_model;
        pub(crate) mod custom_balance_change_model;
    }
}

pub(crate) mod domain {
    pub(crate) mod entities {
        pub(crate) mod account;
        pub(crate) mod amount;
        pub(crate) mod balance_change;
        pub(crate) mod balance_error;
        pub(crate) mod directive;
        pub(crate) mod inventory;
        pub(crate) mod meta;
        pub(crate) mod options;
        pub(crate) mod transaction;
    }
    pub(crate) mod logic {
        pub(crate) mod account_impl;
        pub(crate) mod assertion_evaluator;
        pub(crate) mod balance_tree;
        pub(crate) mod replay_engine;
        pub(crate) mod snapshot_store;
    }
    pub(crate) mod usecases {
        pub(crate) mod process_usecase;
    }
}

pub(crate) mod presentation {
    pub(crate) mod balance_error_fmt;
}

// Public exports.
// ---

#[doc(hidden)]
#[allow(unused_imports)]
pub mod exports {
    // This mod represents how clients see the library, and can differ from the
    // internal structure.
    //
    // The contents of this mod are re-exported in the root of the crate.

    pub mod entities {
        pub use crate::domain::entities::account::*;
        pub use crate::domain::entities::amount::*;
        pub use crate::domain::entities::balance_change::*;
        pub use crate::domain::entities::balance_error::*;
        pub use crate::domain::entities::directive::*;
        pub use crate::domain::entities::inventory::*;
        pub use crate::domain::entities::meta::*;
        pub use crate::domain::entities::options::*;
        pub use crate::domain::entities::transaction::*;
    }
}
