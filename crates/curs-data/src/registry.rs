//! Provider registry.

use crate::provider::{
    BnmProvider, ComertbankProvider, CursMdProvider, EcbProvider, EnergbankProvider,
    EximbankProvider, FincombankProvider, MaibProvider, MicbProvider, OtpProvider,
    ProcreditProvider, RateProvider, VictoriabankProvider,
};
use curs_core::SourcesConfig;

/// Source ids in collection order.
pub const SOURCE_IDS: &[&str] = &[
    BnmProvider::ID,
    MaibProvider::ID,
    MicbProvider::ID,
    VictoriabankProvider::ID,
    OtpProvider::ID,
    EximbankProvider::ID,
    FincombankProvider::ID,
    EnergbankProvider::ID,
    ProcreditProvider::ID,
    ComertbankProvider::ID,
    EcbProvider::ID,
    CursMdProvider::ID,
];

/// Builds one provider, pointed at `url` when given.
fn build(id: &str, url: Option<&str>) -> Option<Box<dyn RateProvider>> {
    macro_rules! make {
        ($provider:ty) => {
            Box::new(match url {
                Some(url) => <$provider>::with_url(url),
                None => <$provider>::new(),
            })
        };
    }

    let provider: Box<dyn RateProvider> = match id {
        BnmProvider::ID => make!(BnmProvider),
        MaibProvider::ID => make!(MaibProvider),
        MicbProvider::ID => make!(MicbProvider),
        VictoriabankProvider::ID => make!(VictoriabankProvider),
        OtpProvider::ID => make!(OtpProvider),
        EximbankProvider::ID => make!(EximbankProvider),
        FincombankProvider::ID => make!(FincombankProvider),
        EnergbankProvider::ID => make!(EnergbankProvider),
        ProcreditProvider::ID => make!(ProcreditProvider),
        ComertbankProvider::ID => make!(ComertbankProvider),
        EcbProvider::ID => make!(EcbProvider),
        CursMdProvider::ID => make!(CursMdProvider),
        _ => return None,
    };
    Some(provider)
}

/// Ordered set of enabled providers.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn RateProvider>>,
}

impl ProviderRegistry {
    /// Every known source with its default URL.
    pub fn default_providers() -> Self {
        Self::from_config(&SourcesConfig::default())
    }

    /// Sources enabled by `config`, with URL overrides applied.
    ///
    /// Unknown ids in `only`, `skip` or `urls` are logged and ignored.
    pub fn from_config(config: &SourcesConfig) -> Self {
        for id in config
            .only
            .iter()
            .chain(config.skip.iter())
            .chain(config.urls.keys())
        {
            if !SOURCE_IDS.contains(&id.as_str()) {
                tracing::warn!(source = %id, "unknown source id in configuration");
            }
        }

        let providers = SOURCE_IDS
            .iter()
            .filter(|id| config.is_enabled(id))
            .filter_map(|id| build(id, config.urls.get(*id).map(String::as_str)))
            .collect();

        Self { providers }
    }

    /// Wraps an explicit provider list, kept in the given order.
    pub fn with_providers(providers: Vec<Box<dyn RateProvider>>) -> Self {
        Self { providers }
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&dyn RateProvider> {
        self.providers
            .iter()
            .find(|p| p.id() == id)
            .map(|p| p.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn RateProvider> {
        self.providers.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
