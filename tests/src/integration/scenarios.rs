//! # Ledger Scenarios
//!
//! The canonical tax-token scenarios, driven through `TokenService` exactly as
//! a host would call them.
//!
//! | Scenario | Expected |
//! |----------|----------|
//! | construction | supply `= initial * 10^decimals`, all on the creator |
//! | 5% transfer of 200 | burn 10, deliver 190, sender -200 |
//! | `transfer_from` 200 against allowance 200 | allowance 0, recipient 190, owner -200 |
//! | `transfer_from` 200 against allowance 150 | `InsufficientAllowance`, no balance change |
//! | `tax <= balance < amount` | `InsufficientBalance` after the burn, tax stays burned |
//! | tax 101 / tax 100 | rejected / everything burns |

#[cfg(test)]
mod tests {
    use tax_token::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn creator() -> Address {
        Address::repeat_byte(0xc0)
    }

    fn alice() -> Address {
        Address::repeat_byte(0xa1)
    }

    fn bob() -> Address {
        Address::repeat_byte(0xb0)
    }

    /// Token whose creator holds `supply` base units.
    fn token(supply: u64, tax: u8, mode: TransferMode) -> TokenService {
        let config = TokenConfig::new("Scenario", "SCN", supply, 0, tax, creator())
            .with_transfer_mode(mode);
        TokenService::new(config).unwrap()
    }

    // =============================================================================
    // CONSTRUCTION
    // =============================================================================

    #[tokio::test]
    async fn test_construction_mints_scaled_supply_to_creator() {
        let config = TokenConfig::new("Ember", "EMB", 1_000_000, 18, 5, creator());
        let service = TokenService::new(config).unwrap();

        let expected = U256::from(1_000_000u64) * U256::exp10(18);
        assert_eq!(service.total_supply().await, expected);
        assert_eq!(service.balance_of(creator()).await, expected);
        assert_eq!(service.balance_of(alice()).await, Amount::zero());

        let info = service.token_info().await;
        assert_eq!(info.decimals, 18);
        assert_eq!(info.tax_percentage, 5);
    }

    #[tokio::test]
    async fn test_tax_percentage_bounds() {
        let err = TokenService::new(TokenConfig::new("T", "T", 10, 0, 101, creator()))
            .err()
            .unwrap();
        assert_eq!(err, TokenError::InvalidTaxPercentage { percentage: 101 });

        let service = token(1_000, 100, TransferMode::Reference);
        service
            .transfer(creator(), bob(), Amount::from(400))
            .await
            .unwrap();

        assert_eq!(service.balance_of(bob()).await, Amount::zero());
        assert_eq!(service.balance_of(creator()).await, Amount::from(600));
        assert_eq!(service.total_supply().await, Amount::from(600));
    }

    // =============================================================================
    // TRANSFER
    // =============================================================================

    #[tokio::test]
    async fn test_five_percent_transfer() {
        let service = token(1_000, 5, TransferMode::Reference);
        service.take_events().await;

        assert!(service
            .transfer(creator(), bob(), Amount::from(200))
            .await
            .unwrap());

        assert_eq!(service.balance_of(creator()).await, Amount::from(800));
        assert_eq!(service.balance_of(bob()).await, Amount::from(190));
        assert_eq!(service.total_supply().await, Amount::from(990));

        assert_eq!(
            service.take_events().await,
            vec![
                TokenEvent::burn(creator(), Amount::from(10)),
                TokenEvent::transfer(creator(), bob(), Amount::from(190)),
            ]
        );
    }

    // =============================================================================
    // TRANSFER FROM
    // =============================================================================

    #[tokio::test]
    async fn test_transfer_from_consumes_gross_allowance() {
        let service = token(1_000, 5, TransferMode::Reference);
        service.approve(creator(), alice(), Amount::from(200)).await;

        service
            .transfer_from(alice(), creator(), bob(), Amount::from(200))
            .await
            .unwrap();

        assert_eq!(service.allowance(creator(), alice()).await, Amount::zero());
        assert_eq!(service.balance_of(bob()).await, Amount::from(190));
        assert_eq!(service.balance_of(creator()).await, Amount::from(800));
        assert_eq!(service.balance_of(alice()).await, Amount::zero());
    }

    #[tokio::test]
    async fn test_transfer_from_insufficient_allowance() {
        for mode in [TransferMode::Reference, TransferMode::Atomic] {
            let service = token(1_000, 5, mode);
            service.approve(creator(), alice(), Amount::from(150)).await;

            let err = service
                .transfer_from(alice(), creator(), bob(), Amount::from(200))
                .await
                .unwrap_err();
            assert_eq!(
                err,
                TokenError::InsufficientAllowance {
                    owner: creator(),
                    spender: alice(),
                    required: Amount::from(200),
                    available: Amount::from(150),
                }
            );

            assert_eq!(service.balance_of(creator()).await, Amount::from(1_000));
            assert_eq!(service.balance_of(bob()).await, Amount::zero());
            assert_eq!(
                service.allowance(creator(), alice()).await,
                Amount::from(150)
            );
        }
    }

    // =============================================================================
    // INSUFFICIENT BALANCE
    // =============================================================================

    #[tokio::test]
    async fn test_exact_balance_transfer_empties_sender() {
        let service = token(200, 5, TransferMode::Reference);

        service
            .transfer(creator(), bob(), Amount::from(200))
            .await
            .unwrap();

        assert_eq!(service.balance_of(creator()).await, Amount::zero());
        assert_eq!(service.balance_of(bob()).await, Amount::from(190));
        assert_eq!(service.total_supply().await, Amount::from(190));
    }

    #[tokio::test]
    async fn test_reference_mode_keeps_tax_burned_on_failed_debit() {
        let service = token(200, 5, TransferMode::Reference);
        service.take_events().await;

        // tax on 210 is 10; 200 - 10 = 190 cannot cover the remaining 200
        let err = service
            .transfer(creator(), bob(), Amount::from(210))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::InsufficientBalance {
                account: creator(),
                required: Amount::from(200),
                available: Amount::from(190),
            }
        );

        assert_eq!(service.balance_of(creator()).await, Amount::from(190));
        assert_eq!(service.balance_of(bob()).await, Amount::zero());
        assert_eq!(service.total_supply().await, Amount::from(190));
        assert_eq!(
            service.take_events().await,
            vec![TokenEvent::burn(creator(), Amount::from(10))]
        );
    }

    #[tokio::test]
    async fn test_atomic_mode_rejects_without_effect() {
        let service = token(200, 5, TransferMode::Atomic);
        service.take_events().await;

        let err = service
            .transfer(creator(), bob(), Amount::from(210))
            .await
            .unwrap_err();
        assert!(matches!(err, TokenError::InsufficientBalance { .. }));

        assert_eq!(service.balance_of(creator()).await, Amount::from(200));
        assert_eq!(service.total_supply().await, Amount::from(200));
        assert!(service.take_events().await.is_empty());
    }

    #[tokio::test]
    async fn test_failed_transfer_from_keeps_allowance_consumed_in_reference_mode() {
        let service = token(100, 5, TransferMode::Reference);
        service.approve(creator(), alice(), Amount::from(500)).await;

        // tax on 500 is 25 and the owner holds 100: the burn passes, the debit fails
        let err = service
            .transfer_from(alice(), creator(), bob(), Amount::from(500))
            .await
            .unwrap_err();
        assert!(matches!(err, TokenError::InsufficientBalance { .. }));

        assert_eq!(service.allowance(creator(), alice()).await, Amount::zero());
        assert_eq!(service.balance_of(creator()).await, Amount::from(75));
        assert_eq!(service.total_supply().await, Amount::from(75));
    }

    #[tokio::test]
    async fn test_supply_conserved_after_every_scenario() {
        let service = token(1_000, 5, TransferMode::Reference);
        service.approve(creator(), alice(), Amount::from(300)).await;
        let _ = service.transfer(creator(), bob(), Amount::from(200)).await;
        let _ = service
            .transfer_from(alice(), creator(), bob(), Amount::from(300))
            .await;
        let _ = service.transfer(bob(), alice(), Amount::from(10_000)).await;

        assert!(service
            .with_engine(|engine| check_supply_conservation(engine.ledger()))
            .await);
    }
}
