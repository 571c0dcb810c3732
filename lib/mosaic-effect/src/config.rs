use crate::{ImageEffectError, ImageEffectResult, TransformKind};
use derivative::Derivative;
use derive_setters::Setters;

/// Everything a batch needs to know: which transforms to run and the block
/// size shared by the block-based ones.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct TransformConfig {
    #[derivative(Default(value = "Vec::new()"))]
    pub transforms: Vec<TransformKind>,

    #[derivative(Default(value = "10"))]
    pub block_size: u32,
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected transforms in order, without repeats.
    pub fn selected(&self) -> Vec<TransformKind> {
        let mut selected = Vec::with_capacity(self.transforms.len());
        for kind in &self.transforms {
            if !selected.contains(kind) {
                selected.push(*kind);
            }
        }
        selected
    }

    pub fn needs_block_size(&self) -> bool {
        self.transforms.iter().any(TransformKind::is_block_based)
    }

    pub fn validate(&self) -> ImageEffectResult<()> {
        if self.transforms.is_empty() {
            return Err(ImageEffectError::NoTransformSelected);
        }

        if self.needs_block_size() && self.block_size == 0 {
            return Err(ImageEffectError::InvalidBlockSize(self.block_size));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = TransformConfig::new();
        assert!(config.transforms.is_empty());
        assert_eq!(config.block_size, 10);
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            TransformConfig::new().validate(),
            Err(ImageEffectError::NoTransformSelected)
        ));

        let config = TransformConfig::new()
            .with_transforms(vec![TransformKind::Pixelate])
            .with_block_size(0);
        assert!(matches!(
            config.validate(),
            Err(ImageEffectError::InvalidBlockSize(0))
        ));

        // Block size is irrelevant when no block transform is selected.
        let config = TransformConfig::new()
            .with_transforms(vec![TransformKind::Grayscale, TransformKind::Invert])
            .with_block_size(0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_selected_drops_repeats() {
        let config = TransformConfig::new().with_transforms(vec![
            TransformKind::Invert,
            TransformKind::Pixelate,
            TransformKind::Invert,
        ]);
        assert_eq!(
            config.selected(),
            vec![TransformKind::Invert, TransformKind::Pixelate]
        );
    }
}
