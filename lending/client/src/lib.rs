pub mod bindings {
    use alloy::sol;

    sol! {
        #[sol(rpc)]
        interface IInstantLendingPool {
            function positions(address user) external view returns (uint256 supplied, uint256 borrowed);

            function getHealthFactor(address user) external view returns (uint256);

            function supply() external payable;

            function borrow(uint256 amount) external;
        }
    }
}

mod deploy;
mod pool;
mod reader;
mod setup;
mod submitter;
mod watch;

pub use {deploy::*, pool::*, reader::*, setup::*, submitter::*, watch::*};
