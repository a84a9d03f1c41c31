use serde::{Serialize, Deserialize};

/// The final color table of a quantized image: one 8-bit RGB triple per
/// cluster, in centroid order.
///
/// A `Palette` can be saved to / loaded from JSON independently of the image
/// it was trained on, so a palette extracted once can be inspected or reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Converts centroids in normalized [0, 1] sample space back to native
    /// 8-bit channels, rounding to the nearest value.
    pub fn from_centroids(centroids: &[Vec<f64>]) -> Palette {
        let colors = centroids.iter()
            .map(|centroid| {
                assert_eq!(centroid.len(), 3, "palette centroids must be RGB");
                [
                    channel_to_u8(centroid[0]),
                    channel_to_u8(centroid[1]),
                    channel_to_u8(centroid[2]),
                ]
            })
            .collect();
        Palette { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Serializes the palette to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a palette from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Palette> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

fn channel_to_u8(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centroids_rounds_and_clamps() {
        let centroids = vec![
            vec![0.0, 0.5, 1.0],
            vec![-0.1, 0.998, 1.2],
        ];
        let palette = Palette::from_centroids(&centroids);
        assert_eq!(palette.colors[0], [0, 128, 255]);
        assert_eq!(palette.colors[1], [0, 254, 255]);
        assert_eq!(palette.len(), 2);
    }
}
