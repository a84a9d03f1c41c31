use rand::SeedableRng;
use rand::rngs::StdRng;

use prism_ml::XorNetwork;
use prism_ml::nn::xor::XOR_TABLE;

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut network = XorNetwork::new(&mut rng);

    let learning_rate = 0.5;
    let epochs = 10000;

    for epoch in 0..epochs {
        let loss = network.train_epoch(learning_rate);
        if epoch % 1000 == 0 {
            println!("Epoch {epoch}: loss = {loss:.6}");
        }
    }

    for (input, _) in XOR_TABLE {
        println!("Input: {:?} -> Output: {:.4}", input, network.forward(input));
    }
}
