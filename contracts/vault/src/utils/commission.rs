/// Splits a withdrawn balance into `(payout, commission)`.
///
/// The commission is `floor(balance * percentage / 100)`, computed on the
/// quotient and remainder separately so the multiplication never overflows
/// for percentages up to 100. Whatever the floor drops stays with the payout.
pub fn split_withdrawal(balance: u128, percentage: u32) -> (u128, u128) {
    let percentage: u128 = percentage as u128;
    let commission: u128 = (balance / 100) * percentage + (balance % 100) * percentage / 100;

    (balance - commission, commission)
}
