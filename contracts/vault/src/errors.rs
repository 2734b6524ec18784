use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum ContractErrors {
    AlreadyInitiated = 0,
    NotInitiated = 1,
    InvalidPercentage = 2,
    InvalidAmount = 3,
    NoBalance = 4,
    NoIncome = 5,
    NotOwner = 6,
    TransferFailed = 7,
    FailedToDeposit = 8,
}
