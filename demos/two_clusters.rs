use rand::SeedableRng;
use rand::rngs::StdRng;

use prism_ml::KMeans;
use prism_ml::cluster::kmeans::sum_squared_error;

fn main() {
    let samples = vec![
        vec![0.0, 0.0],
        vec![0.0, 0.0],
        vec![10.0, 10.0],
        vec![10.0, 10.0],
    ];

    let mut rng = StdRng::seed_from_u64(42);
    let fit = KMeans::new(2, 10).fit(&samples, &mut rng).expect("valid arguments");

    println!(
        "{} after {} iterations",
        if fit.converged { "Converged" } else { "Hit the iteration cap" },
        fit.iterations,
    );
    for (index, centroid) in fit.centroids.iter().enumerate() {
        println!("Centroid {index}: {centroid:?}");
    }
    for (sample, cluster) in samples.iter().zip(fit.assignments.iter()) {
        println!("Sample {sample:?} -> cluster {cluster}");
    }
    println!(
        "Sum of squared error: {:.4}",
        sum_squared_error(&samples, &fit.centroids, &fit.assignments),
    );
}
