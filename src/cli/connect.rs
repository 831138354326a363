//! Turn connection flags and the config file into authenticated stores.
//!
//! Flags and environment variables win over the config file. Every
//! required argument is checked before the first request is sent.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::ConnectionArgs;
use crate::core::config::Settings;
use crate::core::exclusion::ExclusionSet;
use crate::core::path::SecretPath;
use crate::core::store::{DryRun, Endpoint, Store, Vault};
use crate::error::{ConfigError, Result};

/// Resolved connection settings for one command run.
pub struct Connections<'a> {
    args: &'a ConnectionArgs,
    settings: Settings,
}

impl<'a> Connections<'a> {
    /// Load the config file named by the flags, or the default one.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load(args: &'a ConnectionArgs) -> Result<Self> {
        let settings = Settings::load(args.config.as_deref())?;
        Ok(Self { args, settings })
    }

    /// Build from already-loaded settings.
    pub fn with_settings(args: &'a ConnectionArgs, settings: Settings) -> Self {
        Self { args, settings }
    }

    /// Connect to the source instance.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the address or token is absent,
    /// otherwise any connection or authentication error.
    pub fn source(&self) -> Result<Box<dyn Store>> {
        let mut missing = Vec::new();
        let endpoint = self.source_endpoint(&mut missing);
        ensure_present(missing)?;
        match endpoint {
            Some(endpoint) => self.open(&endpoint),
            None => Err(ConfigError::Missing(vec!["vault-addr".into()]).into()),
        }
    }

    /// Connect to both the source and the target instance.
    ///
    /// All four connection arguments are checked before either instance is
    /// contacted.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming every absent argument.
    pub fn source_and_target(&self) -> Result<(Box<dyn Store>, Box<dyn Store>)> {
        let mut missing = Vec::new();
        let source = self.source_endpoint(&mut missing);
        let target = self.target_endpoint(&mut missing);
        ensure_present(missing)?;

        match (source, target) {
            (Some(source), Some(target)) => Ok((self.open(&source)?, self.open(&target)?)),
            _ => Err(ConfigError::Missing(vec!["vault-target-addr".into()]).into()),
        }
    }

    /// Exclusions from the config file merged with those given on the
    /// command line.
    ///
    /// # Errors
    ///
    /// Returns `PathError` if a configured prefix is malformed.
    pub fn exclusions(&self, extra: &[SecretPath]) -> Result<ExclusionSet> {
        let mut prefixes = self
            .settings
            .exclude
            .iter()
            .map(|raw| SecretPath::parse(raw))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if !prefixes.is_empty() {
            debug!(count = prefixes.len(), "exclusions from config file");
        }
        prefixes.extend(extra.iter().cloned());
        Ok(ExclusionSet::new(prefixes))
    }

    /// Whether mutations are suppressed.
    pub fn is_dry_run(&self) -> bool {
        self.args.dry_run
    }

    fn source_endpoint(&self, missing: &mut Vec<String>) -> Option<Endpoint> {
        self.endpoint(
            self.args.vault_addr.as_deref(),
            self.settings.source.address.as_deref(),
            self.args.vault_token.as_deref(),
            ("vault-addr", "vault-token"),
            missing,
        )
    }

    fn target_endpoint(&self, missing: &mut Vec<String>) -> Option<Endpoint> {
        self.endpoint(
            self.args.vault_target_addr.as_deref(),
            self.settings.target.address.as_deref(),
            self.args.vault_target_token.as_deref(),
            ("vault-target-addr", "vault-target-token"),
            missing,
        )
    }

    fn endpoint(
        &self,
        flag_address: Option<&str>,
        file_address: Option<&str>,
        token: Option<&str>,
        (address_name, token_name): (&str, &str),
        missing: &mut Vec<String>,
    ) -> Option<Endpoint> {
        let address = non_empty(flag_address).or_else(|| non_empty(file_address));
        let token = non_empty(token);

        if address.is_none() {
            missing.push(address_name.to_string());
        }
        if token.is_none() {
            missing.push(token_name.to_string());
        }

        let (address, token) = (address?, token?);
        Some(Endpoint {
            address: address.to_string(),
            token: Zeroizing::new(token.to_string()),
            skip_tls: self.args.skip_tls || self.settings.skip_tls,
            timeout: self.settings.timeout(),
        })
    }

    fn open(&self, endpoint: &Endpoint) -> Result<Box<dyn Store>> {
        let vault = Vault::connect(endpoint)?;
        if self.args.dry_run {
            debug!(address = %endpoint.address, "dry run enabled");
            Ok(Box::new(DryRun::new(vault)))
        } else {
            Ok(Box::new(vault))
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn ensure_present(missing: Vec<String>) -> Result<()> {
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Missing(missing).into())
    }
}
