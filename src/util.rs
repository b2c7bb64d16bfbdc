use crate::{
    domain::usecases::process_usecase::{ProcessUsecase as _, ProcessUsecaseImpl},
    entities::{BalanceError, Directive, OptionsMap},
    errors::BalanceChangeError,
};

pub struct BalanceChangeUtil {
    process_usecase: ProcessUsecaseImpl,
}

impl BalanceChangeUtil {
    pub fn new() -> Self {
        Self {
            process_usecase: ProcessUsecaseImpl::new(),
        }
    }

    /// Checks every balance change assertion in `entries`.
    ///
    /// Directives are returned in input order and otherwise unchanged, apart
    /// from `starting_amount` / `diff_amount` metadata on evaluated
    /// assertions. Check failures never abort the pass; they are returned in
    /// processing order. `Err` is only returned for an invalid plugin
    /// configuration under the `balance_change` option.
    pub fn process(
        &self,
        entries: Vec<Directive>,
        options: &OptionsMap,
    ) -> Result<(Vec<Directive>, Vec<BalanceError>), BalanceChangeError> {
        self.process_usecase.process(entries, options)
    }
}

impl Default for BalanceChangeUtil {
    fn default() -> Self {
        Self::new()
    }
}

/// Plugin entry point. See [`BalanceChangeUtil::process`].
pub fn balance_change(
    entries: Vec<Directive>,
    options: &OptionsMap,
) -> Result<(Vec<Directive>, Vec<BalanceError>), BalanceChangeError> {
    BalanceChangeUtil::new().process(entries, options)
}
