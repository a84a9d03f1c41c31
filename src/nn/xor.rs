use rand::Rng;

use crate::math::matrix::Matrix;

/// The four XOR rows: inputs and expected output.
pub const XOR_TABLE: [([f64; 2], f64); 4] = [
    ([0.0, 0.0], 0.0),
    ([0.0, 1.0], 1.0),
    ([1.0, 0.0], 1.0),
    ([1.0, 1.0], 0.0),
];

/// A feed-forward network with a fixed 2 → 2 → 1 sigmoid topology, just
/// large enough to learn XOR.
///
/// The topology is deliberately hard-wired: weights live in four explicit
/// matrices and back-propagation is written out for exactly these two
/// layers. This is a teaching artifact, not a configurable engine.
#[derive(Debug, Clone)]
pub struct XorNetwork {
    hidden_weights: Matrix, // 2x2, input  -> hidden
    hidden_biases: Matrix,  // 1x2
    output_weights: Matrix, // 2x1, hidden -> output
    output_biases: Matrix,  // 1x1
}

impl XorNetwork {
    /// Initializes all weights and biases uniformly in [-1, 1) from the
    /// caller's random source.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> XorNetwork {
        XorNetwork {
            hidden_weights: Matrix::random(2, 2, rng),
            hidden_biases: Matrix::random(1, 2, rng),
            output_weights: Matrix::random(2, 1, rng),
            output_biases: Matrix::random(1, 1, rng),
        }
    }

    /// Forward pass for one input pair; output is a sigmoid value in (0, 1).
    pub fn forward(&self, input: [f64; 2]) -> f64 {
        let (_, output) = self.activations(input);
        output.data[0][0]
    }

    /// One pass of online gradient descent over the four XOR rows.
    /// Returns the mean squared error of the epoch.
    pub fn train_epoch(&mut self, learning_rate: f64) -> f64 {
        let mut total_loss = 0.0;

        for (input, target) in XOR_TABLE {
            let x = Matrix::from_data(vec![input.to_vec()]);
            let (hidden, output) = self.activations(input);
            let y = output.data[0][0];

            total_loss += (y - target).powi(2);

            // Output delta in pre-activation space: (y - t) · σ'(z_out),
            // with σ'(z) recovered from the activation as a(1 - a).
            let output_delta = Matrix::from_data(vec![vec![(y - target) * y * (1.0 - y)]]);

            // Hidden delta: error pushed back through the output weights,
            // gated by the hidden layer's sigmoid derivative.
            let hidden_error = output_delta.clone() * self.output_weights.transpose();
            let hidden_delta = hidden_error.hadamard(&hidden.map(|a| a * (1.0 - a)));

            let output_w_grad = hidden.transpose() * output_delta.clone();
            let hidden_w_grad = x.transpose() * hidden_delta.clone();

            self.output_weights =
                self.output_weights.clone() - output_w_grad.map(|g| g * learning_rate);
            self.output_biases =
                self.output_biases.clone() - output_delta.map(|g| g * learning_rate);
            self.hidden_weights =
                self.hidden_weights.clone() - hidden_w_grad.map(|g| g * learning_rate);
            self.hidden_biases =
                self.hidden_biases.clone() - hidden_delta.map(|g| g * learning_rate);
        }

        total_loss / XOR_TABLE.len() as f64
    }

    /// Forward pass keeping the hidden activations for backprop.
    fn activations(&self, input: [f64; 2]) -> (Matrix, Matrix) {
        let x = Matrix::from_data(vec![input.to_vec()]);
        let hidden =
            (x * self.hidden_weights.clone() + self.hidden_biases.clone()).map(sigmoid);
        let output =
            (hidden.clone() * self.output_weights.clone() + self.output_biases.clone()).map(sigmoid);
        (hidden, output)
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_forward_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(1);
        let network = XorNetwork::new(&mut rng);
        for (input, _) in XOR_TABLE {
            let y = network.forward(input);
            assert!((0.0..1.0).contains(&y), "output {y} outside (0, 1)");
        }
    }

    /// Mean squared error over the four rows without updating weights.
    fn eval_loss(network: &XorNetwork) -> f64 {
        XOR_TABLE.iter()
            .map(|(input, target)| (network.forward(*input) - target).powi(2))
            .sum::<f64>() / XOR_TABLE.len() as f64
    }

    #[test]
    fn test_training_reduces_loss() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut network = XorNetwork::new(&mut rng);

        let initial_loss = eval_loss(&network);
        for _ in 0..10000 {
            network.train_epoch(0.5);
        }
        let final_loss = eval_loss(&network);

        assert!(
            final_loss < initial_loss,
            "loss did not improve: {initial_loss} -> {final_loss}",
        );
    }

    #[test]
    fn test_hand_built_solution_computes_xor() {
        // OR-ish and AND-ish hidden units, output fires for OR-and-not-AND.
        let network = XorNetwork {
            hidden_weights: Matrix::from_data(vec![vec![6.0, 6.0], vec![6.0, 6.0]]),
            hidden_biases: Matrix::from_data(vec![vec![-3.0, -9.0]]),
            output_weights: Matrix::from_data(vec![vec![10.0], vec![-10.0]]),
            output_biases: Matrix::from_data(vec![vec![-5.0]]),
        };

        for (input, target) in XOR_TABLE {
            let y = network.forward(input);
            assert_eq!(
                y.round(),
                target,
                "XOR({}, {}) -> {y}, expected {target}",
                input[0],
                input[1],
            );
        }
    }
}
