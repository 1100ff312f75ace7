// Strategy: the cart delegates payment to whatever strategy is plugged in.

use super::error::PatternError;

pub trait PaymentStrategy {
    /// Performs the payment and returns the receipt line.
    fn pay(&self, amount: u32) -> String;
}

pub struct CreditCardStrategy {
    pub card_number: String,
}

impl CreditCardStrategy {
    pub fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }
}

impl PaymentStrategy for CreditCardStrategy {
    fn pay(&self, amount: u32) -> String {
        format!("Paid {} using Credit Card: {}", amount, self.card_number)
    }
}

pub struct PayPalStrategy {
    pub email: String,
}

impl PayPalStrategy {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalStrategy {
    fn pay(&self, amount: u32) -> String {
        format!("Paid {} using PayPal: {}", amount, self.email)
    }
}

#[derive(Default)]
pub struct ShoppingCart {
    strategy: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn checkout(&self, amount: u32) -> Result<String, PatternError> {
        let strategy = self
            .strategy
            .as_ref()
            .ok_or(PatternError::NoPaymentStrategy)?;
        Ok(strategy.pay(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_without_strategy() {
        let cart = ShoppingCart::new();
        assert_eq!(cart.checkout(100), Err(PatternError::NoPaymentStrategy));
    }

    #[test]
    fn test_credit_card_checkout() {
        let mut cart = ShoppingCart::new();
        cart.set_payment_strategy(Box::new(CreditCardStrategy::new("1234-5678-9876-5432")));
        assert_eq!(
            cart.checkout(100).unwrap(),
            "Paid 100 using Credit Card: 1234-5678-9876-5432"
        );
    }

    #[test]
    fn test_switching_strategy() {
        let mut cart = ShoppingCart::new();
        cart.set_payment_strategy(Box::new(CreditCardStrategy::new("1111")));
        cart.set_payment_strategy(Box::new(PayPalStrategy::new("anna@example.com")));
        assert_eq!(
            cart.checkout(200).unwrap(),
            "Paid 200 using PayPal: anna@example.com"
        );
    }
}
