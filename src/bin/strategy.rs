use design_patterns::console::title;
use design_patterns::patterns::strategy::{
    CreditCardStrategy, PayPalStrategy, PaymentStrategy, ShoppingCart,
};

fn main() {
    println!("{}\n", title("Strategy"));

    let mut cart = ShoppingCart::new();

    let steps: Vec<(Option<Box<dyn PaymentStrategy>>, u32)> = vec![
        (None, 50),
        (Some(Box::new(CreditCardStrategy::new("1234-5678-9876-5432"))), 100),
        (Some(Box::new(PayPalStrategy::new("shopper@example.com"))), 200),
    ];

    for (strategy, amount) in steps {
        if let Some(strategy) = strategy {
            cart.set_payment_strategy(strategy);
        }
        match cart.checkout(amount) {
            Ok(receipt) => println!("{}", receipt),
            Err(err) => println!("{}", err),
        }
    }
}
