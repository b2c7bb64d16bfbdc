use std::str::FromStr as _;

use crate::{
    data::models::balance_change_config_model::BalanceChangeConfigModel,
    domain::logic::replay_engine::ReplayEngine,
    entities::{BalanceChangeConfig, BalanceError, Directive, OptionsMap, CONFIG_OPTION_KEY},
    errors::BalanceChangeError,
};

pub trait ProcessUsecase: Send + Sync {
    fn process(
        &self,
        entries: Vec<Directive>,
        options: &OptionsMap,
    ) -> Result<(Vec<Directive>, Vec<BalanceError>), BalanceChangeError>;
}

pub(crate) struct ProcessUsecaseImpl;

impl ProcessUsecase for ProcessUsecaseImpl {
    fn process(
        &self,
        entries: Vec<Directive>,
        options: &OptionsMap,
    ) -> Result<(Vec<Directive>, Vec<BalanceError>), BalanceChangeError> {
        let config = Self::config(options)?;
        Ok(ReplayEngine::new(config).process(entries))
    }
}

impl ProcessUsecaseImpl {
    pub(crate) fn new() -> Self {
        ProcessUsecaseImpl
    }

    fn config(options: &OptionsMap) -> Result<BalanceChangeConfig, BalanceChangeError> {
        match options.get(CONFIG_OPTION_KEY) {
            Some(raw) => BalanceChangeConfigModel::from_str(raw)?.try_into(),
            None => Ok(BalanceChangeConfig::default()),
        }
    }
}
