use alloy_sol_types::SolValue;

/// Foundry artifact name of the test ERC-20 fee token.
pub const TEST_ERC20_CONTRACT: &str = "base_erc20";

/// Foundry artifact name of the test ERC-721 collection.
pub const TEST_ERC721_CONTRACT: &str = "base_erc721";

crate::sol! {
    /// Test fungible token used to pay bridge fees on dev networks.
    /// Not meant for production deployments.
    interface ITestERC20 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address account) external view returns (uint256);
        function transfer(address to, uint256 amount) external returns (bool);
        function approve(address spender, uint256 amount) external returns (bool);
    }

    /// Test non-fungible collection, deployed with a caller-supplied
    /// display name and symbol. Not meant for production deployments.
    interface ITestERC721 {
        function name() external view returns (string memory);
        function symbol() external view returns (string memory);
        function balanceOf(address owner) external view returns (uint256);
        function ownerOf(uint256 tokenId) external view returns (address);
    }
}

/// ABI-encode the test ERC-721 constructor arguments:
/// `constructor(string name, string symbol)`.
pub fn erc721_constructor_args(name: &str, symbol: &str) -> Vec<u8> {
    (name.to_string(), symbol.to_string()).abi_encode_params()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erc721_constructor_encoding() {
        let encoded = erc721_constructor_args("Test NFT", "TNFT");

        // Two offset words, then (length word + one data word) per string.
        assert_eq!(encoded.len(), 6 * 32);
        assert_eq!(encoded[31], 0x40);
        assert_eq!(&encoded[96..104], b"Test NFT");
    }
}
