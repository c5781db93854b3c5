//! CLI tool for deploying and interacting with the share vault contracts.

use share_vault_contracts::token::{FungibleToken, FungibleTokenHostRef};
use share_vault_contracts::vault::ShareVault;
use odra::casper_types::U256;
use odra::prelude::{Address, Addressable};
use odra::host::{HostEnv, HostRef};
use odra::schema::casper_contract_schema::NamedCLType;
use odra_cli::{
    deploy::DeployScript,
    scenario::{Args, Error, Scenario, ScenarioMetadata},
    CommandArg, ContractProvider, DeployedContractsContainer, DeployerExt,
    OdraCli,
};

/// Deploys the underlying asset token.
pub struct AssetDeployScript;

impl DeployScript for AssetDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use share_vault_contracts::token::FungibleTokenInitArgs;

        let _asset = FungibleToken::load_or_deploy(
            &env,
            FungibleTokenInitArgs {
                name: String::from("Vault Asset"),
                symbol: String::from("VAST"),
            },
            container,
            300_000_000_000
        )?;

        Ok(())
    }
}

/// Deploys the Share Vault.
/// Requires the asset token to be deployed first.
pub struct VaultDeployScript;

impl DeployScript for VaultDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        use share_vault_contracts::vault::ShareVaultInitArgs;

        let asset = container.contract_ref::<FungibleToken>(env)?;

        let _vault = ShareVault::load_or_deploy(
            &env,
            ShareVaultInitArgs {
                asset: asset.address().clone(),
                name: String::from("Vault Share"),
                symbol: String::from("vSHR"),
            },
            container,
            500_000_000_000 // Vault carries four submodules
        )?;

        Ok(())
    }
}

/// Deploys the asset token and the vault.
pub struct FullDeployScript;

impl DeployScript for FullDeployScript {
    fn deploy(
        &self,
        env: &HostEnv,
        container: &mut DeployedContractsContainer
    ) -> Result<(), odra_cli::deploy::Error> {
        AssetDeployScript.deploy(env, container)?;
        VaultDeployScript.deploy(env, container)?;
        Ok(())
    }
}

/// Scenario to deposit the asset into the vault.
pub struct DepositScenario;

impl Scenario for DepositScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "amount",
            "Amount of the asset to deposit",
            NamedCLType::U256,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut vault = container.contract_ref::<ShareVault>(env)?;
        let mut asset = container.contract_ref::<FungibleToken>(env)?;
        let amount = args.get_single::<U256>("amount")?;
        let caller = env.caller();

        env.set_gas(50_000_000_000);
        asset.try_approve(vault.address().clone(), amount)?;

        env.set_gas(100_000_000_000);
        let shares = vault.try_deposit(amount, caller)?;

        println!("Deposited {} for {} shares", amount, shares);
        Ok(())
    }
}

impl ScenarioMetadata for DepositScenario {
    const NAME: &'static str = "deposit";
    const DESCRIPTION: &'static str = "Deposits the asset and credits shares to the caller";
}

/// Scenario to fund a reward token across all current shares.
pub struct AddRewardScenario;

impl Scenario for AddRewardScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![
            CommandArg::new(
                "token",
                "Address of the reward token",
                NamedCLType::Key,
            ),
            CommandArg::new(
                "amount",
                "Amount of the reward token to distribute",
                NamedCLType::U256,
            ),
        ]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut vault = container.contract_ref::<ShareVault>(env)?;
        let token = args.get_single::<Address>("token")?;
        let amount = args.get_single::<U256>("amount")?;

        let mut reward = FungibleTokenHostRef::new(token, env.clone());
        env.set_gas(50_000_000_000);
        reward.try_approve(vault.address().clone(), amount)?;

        env.set_gas(150_000_000_000);
        vault.try_add_reward(token, amount)?;

        println!(
            "Reward added, accumulator is now {}",
            vault.reward_per_share(token)
        );
        Ok(())
    }
}

impl ScenarioMetadata for AddRewardScenario {
    const NAME: &'static str = "add-reward";
    const DESCRIPTION: &'static str = "Funds a reward token for all current depositors";
}

/// Scenario to claim rewards one batch at a time until the registry is exhausted.
pub struct ClaimRewardsScenario;

impl Scenario for ClaimRewardsScenario {
    fn args(&self) -> Vec<CommandArg> {
        vec![CommandArg::new(
            "start",
            "Registry position to start claiming from",
            NamedCLType::U32,
        )]
    }

    fn run(
        &self,
        env: &HostEnv,
        container: &DeployedContractsContainer,
        args: Args
    ) -> Result<(), Error> {
        let mut vault = container.contract_ref::<ShareVault>(env)?;
        let mut start = args.get_single::<u32>("start")?;

        loop {
            env.set_gas(300_000_000_000);
            let cursor = vault.try_claim_all_reward(start)?;
            println!(
                "Claimed positions {}..{} of {}",
                cursor.position, cursor.next_position, cursor.token_count
            );
            if cursor.next_position >= cursor.token_count {
                break;
            }
            start = cursor.next_position;
        }
        Ok(())
    }
}

impl ScenarioMetadata for ClaimRewardsScenario {
    const NAME: &'static str = "claim-rewards";
    const DESCRIPTION: &'static str = "Claims every pending reward for the caller";
}

/// Main function to run the CLI tool.
pub fn main() {
    OdraCli::new()
        .about("CLI tool for the share vault contracts")
        // Deploy scripts
        .deploy(AssetDeployScript)
        .deploy(VaultDeployScript)
        .deploy(FullDeployScript)
        // Contract references
        .contract::<ShareVault>()
        .contract::<FungibleToken>()
        // Scenarios
        .scenario(DepositScenario)
        .scenario(AddRewardScenario)
        .scenario(ClaimRewardsScenario)
        .build()
        .run();
}
