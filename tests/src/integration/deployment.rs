//! # Deployment Flow
//!
//! Token metadata + network resolution + deployment registry, the way a
//! deployment tool records an instance after it goes live.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use tax_token::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn creator() -> Address {
        Address::repeat_byte(0xc0)
    }

    fn token(name: &str, symbol: &str) -> TokenService {
        let config = TokenConfig::new(name, symbol, 1_000, 18, 3, creator()).with_links(
            Some("https://example.org".to_string()),
            Some("https://social.example.org/token".to_string()),
        );
        TokenService::new(config).unwrap()
    }

    /// Resolver that only knows the networks it was seeded with.
    struct FixedResolver {
        names: HashMap<u64, &'static str>,
    }

    impl NetworkResolver for FixedResolver {
        fn resolve(&self, chain_id: u64) -> NetworkInfo {
            match self.names.get(&chain_id) {
                Some(name) => NetworkInfo::Known {
                    chain_id,
                    name: (*name).to_string(),
                    explorer_template: format!("https://explorer.local/{chain_id}/{{address}}"),
                },
                None => NetworkInfo::Unknown { chain_id },
            }
        }
    }

    // =============================================================================
    // INTEGRATION TESTS: SERVICE → RESOLVER → REGISTRY
    // =============================================================================

    #[tokio::test]
    async fn test_deployment_recorded_with_explorer_link() {
        let service = token("Ember", "EMB");
        let resolver = StaticNetworkResolver::well_known();
        let registry = InMemoryDeploymentRegistry::new();
        let address: Address = "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap();

        let (index, record) = service
            .register_deployment(address, 1, &resolver, &registry)
            .await;

        assert_eq!(index, 0);
        assert_eq!(record.name, "Ember");
        assert_eq!(record.symbol, "EMB");
        assert_eq!(record.network, "Ethereum Mainnet");
        assert_eq!(
            record.explorer_url.as_deref(),
            Some("https://etherscan.io/address/0x5fbdb2315678afecb367f032d93f642f64180aa3")
        );
    }

    #[tokio::test]
    async fn test_unknown_network_recorded_without_link() {
        let service = token("Ember", "EMB");
        let resolver = StaticNetworkResolver::well_known();
        let registry = InMemoryDeploymentRegistry::new();

        let (_, record) = service
            .register_deployment(Address::repeat_byte(1), 9_999_999, &resolver, &registry)
            .await;

        assert_eq!(record.network, "Unknown Network");
        assert!(record.explorer_url.is_none());
    }

    #[tokio::test]
    async fn test_registry_through_trait_objects() {
        let resolver: Arc<dyn NetworkResolver> = Arc::new(FixedResolver {
            names: HashMap::from([(31_337, "Local Devnet")]),
        });
        let registry: Arc<dyn DeploymentRegistry> = Arc::new(InMemoryDeploymentRegistry::new());

        let tokens = [token("Alpha", "AAA"), token("Beta", "BBB"), token("Gamma", "CCC")];
        for (i, service) in tokens.iter().enumerate() {
            let (index, _) = service
                .register_deployment(
                    Address::repeat_byte(i as u8 + 1),
                    31_337,
                    resolver.as_ref(),
                    registry.as_ref(),
                )
                .await;
            assert_eq!(index, i);
        }

        let removed = registry.remove(1).await.unwrap();
        assert_eq!(removed.symbol, "BBB");

        let remaining: Vec<String> = registry
            .list()
            .await
            .into_iter()
            .map(|record| record.symbol)
            .collect();
        assert_eq!(remaining, vec!["AAA", "CCC"]);

        let err = registry.remove(2).await.unwrap_err();
        assert_eq!(err, RegistryError::IndexOutOfRange { index: 2, len: 2 });
        assert!(err.to_string().contains("out of range"));
    }

    #[tokio::test]
    async fn test_metadata_links_exposed() {
        let service = token("Ember", "EMB");
        let info = service.token_info().await;
        assert_eq!(info.website.as_deref(), Some("https://example.org"));
        assert_eq!(
            info.social_link.as_deref(),
            Some("https://social.example.org/token")
        );
    }

    #[tokio::test]
    async fn test_config_file_to_deployment() {
        let config = TokenConfig::from_toml_str(
            r#"
            initial_supply = 500
            decimals = 0
            tax_percentage = 2
            owner = "0xc0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0"
            transfer_mode = "atomic"

            [metadata]
            name = "Config Token"
            symbol = "CFG"
            "#,
        )
        .unwrap();
        let service = TokenService::new(config).unwrap();
        assert_eq!(service.balance_of(creator()).await, Amount::from(500));

        let registry = InMemoryDeploymentRegistry::new();
        let (_, record) = service
            .register_deployment(
                Address::repeat_byte(9),
                8_453,
                &StaticNetworkResolver::default(),
                &registry,
            )
            .await;
        assert_eq!(record.name, "Config Token");
        assert_eq!(record.network, "Base");
    }
}
