use alloy_primitives::Address;
use alloy_sol_types::SolValue;

/// Foundry artifact name of the bridge contract.
pub const BRIDGE_CONTRACT: &str = "ERC721Bridge";

crate::sol! {
    /// Administrative surface of the ERC-721 bridge.
    ///
    /// The constructor bakes in three role-bearing addresses (signer, fee
    /// receiver, operator); every function below is gated on the operator
    /// role and reverts for any other sender.
    interface IERC721Bridge {
        /// Register or update an NFT collection: whether it is bridgeable,
        /// which ERC-20 pays its fees, and the flat deposit/withdraw fee
        /// amounts in the fee token's smallest unit.
        function setNFTDetails(
            bool isActive,
            address nftContractAddress,
            address feeTokenAddress,
            uint256 depositFeeAmount,
            uint256 withdrawFeeAmount
        ) external;

        /// Register or update an ERC-20 as an accepted fee-payment token.
        function setERC20Details(bool isActive, address erc20ContractAddress) external;

        /// Globally enable or disable bridge operation.
        function setBridgeStatus(bool isActive) external;

        /// Globally enable or disable fee charging.
        function setFeeStatus(bool isActive) external;
    }
}

/// ABI-encode the bridge constructor arguments.
///
/// Argument order matches the deployed contract:
/// `constructor(address signer, address feeReceiver, address operator)`.
pub fn bridge_constructor_args(
    bridge_signer: Address,
    fee_receiver: Address,
    operator: Address,
) -> Vec<u8> {
    (bridge_signer, fee_receiver, operator).abi_encode_params()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::keccak256;
    use alloy_sol_types::SolCall;

    #[test]
    fn test_configuration_call_signatures() {
        assert_eq!(
            IERC721Bridge::setNFTDetailsCall::SIGNATURE,
            "setNFTDetails(bool,address,address,uint256,uint256)"
        );
        assert_eq!(
            IERC721Bridge::setERC20DetailsCall::SIGNATURE,
            "setERC20Details(bool,address)"
        );
        assert_eq!(IERC721Bridge::setBridgeStatusCall::SIGNATURE, "setBridgeStatus(bool)");
        assert_eq!(IERC721Bridge::setFeeStatusCall::SIGNATURE, "setFeeStatus(bool)");
    }

    #[test]
    fn test_selectors_match_signature_hashes() {
        let expected = keccak256(IERC721Bridge::setNFTDetailsCall::SIGNATURE.as_bytes());
        assert_eq!(
            IERC721Bridge::setNFTDetailsCall::SELECTOR.as_slice(),
            &expected[..4]
        );

        let expected = keccak256(IERC721Bridge::setBridgeStatusCall::SIGNATURE.as_bytes());
        assert_eq!(
            IERC721Bridge::setBridgeStatusCall::SELECTOR.as_slice(),
            &expected[..4]
        );
    }

    /// Constructor encoding: three addresses, each left-padded to a word.
    #[test]
    fn test_constructor_encoding() {
        let signer = Address::repeat_byte(0xAA);
        let fee_receiver = Address::repeat_byte(0xBB);
        let operator = Address::repeat_byte(0xCC);

        let encoded = bridge_constructor_args(signer, fee_receiver, operator);

        assert_eq!(encoded.len(), 3 * 32);
        assert_eq!(&encoded[..12], &[0u8; 12]);
        assert_eq!(&encoded[12..32], signer.as_slice());
        assert_eq!(&encoded[44..64], fee_receiver.as_slice());
        assert_eq!(&encoded[76..96], operator.as_slice());
    }
}
