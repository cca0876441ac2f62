use crate::AlignerError;

pub const DEFAULT_BLOCK_SIZE: usize = 10;
pub const DEFAULT_LINE_WIDTH: usize = 65;

/// Layout of the rendered alignment body.
///
/// Fields are only set through validating constructors, so every value
/// reaching the formatter has `block_size >= 1` and
/// `line_width > block_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    block_size: usize,
    line_width: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from both settings at once.
    pub fn try_new(block_size: usize, line_width: usize) -> Result<Self, AlignerError> {
        let layout = Self {
            block_size,
            line_width,
        };
        layout.validate()?;
        Ok(layout)
    }

    /// Residues between inserted spaces.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Characters per output line, spaces included, before wrapping.
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    pub fn with_block_size(mut self, block_size: usize) -> Result<Self, AlignerError> {
        self.block_size = block_size;
        self.validate()?;
        Ok(self)
    }

    pub fn with_line_width(mut self, line_width: usize) -> Result<Self, AlignerError> {
        self.line_width = line_width;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), AlignerError> {
        if self.block_size == 0 {
            return Err(AlignerError::InvalidLayout(
                "block size must be at least 1".to_string(),
            ));
        }
        if self.line_width <= self.block_size {
            return Err(AlignerError::InvalidLayout(format!(
                "line width {} must exceed block size {}",
                self.line_width, self.block_size
            )));
        }
        Ok(())
    }
}
