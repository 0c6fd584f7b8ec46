use {
    alloy::{
        network::EthereumWallet,
        primitives::Address,
        providers::{DynProvider, Provider, ProviderBuilder},
        signers::local::{MnemonicBuilder, PrivateKeySigner, coins_bip39::English},
    },
    anyhow::Context,
    std::env,
    url::Url,
};

/// Environment variable holding the signer's BIP-39 mnemonic.
pub const MNEMONIC_ENV: &str = "EVM_MNEMONIC";

/// Load the signer from [`MNEMONIC_ENV`], if set.
///
/// Without a signer the client can still read, but not write.
pub fn signer_from_env() -> anyhow::Result<Option<PrivateKeySigner>> {
    match env::var(MNEMONIC_ENV) {
        Ok(mnemonic) if !mnemonic.trim().is_empty() => {
            let signer = MnemonicBuilder::<English>::default()
                .phrase(mnemonic.trim())
                .build()
                .with_context(|| format!("invalid mnemonic in `{MNEMONIC_ENV}`"))?;

            Ok(Some(signer))
        },
        _ => Ok(None),
    }
}

/// An HTTP provider, signing with `signer` if there is one.
pub fn connect(
    rpc_url: &str,
    signer: Option<PrivateKeySigner>,
) -> anyhow::Result<(DynProvider, Option<Address>)> {
    let url = Url::parse(rpc_url).with_context(|| format!("invalid RPC URL `{rpc_url}`"))?;

    match signer {
        Some(signer) => {
            let address = signer.address();
            let provider = ProviderBuilder::new()
                .wallet(EthereumWallet::new(signer))
                .connect_http(url)
                .erased();

            Ok((provider, Some(address)))
        },
        None => {
            let provider = ProviderBuilder::new().connect_http(url).erased();

            Ok((provider, None))
        },
    }
}
