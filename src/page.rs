//! Page model for the meme editor screen
//!
//! Holds the elements the coordinator reads and mutates: two caption inputs,
//! the submit button, the output container and the error text. The terminal
//! UI draws whatever this model contains; nothing here knows about ratatui.

/// Border style of a caption input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Neutral,
    /// Highlights a field that still needs text
    Error,
}

/// The two caption inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionField {
    Top,
    Bottom,
}

/// Element that currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    TopInput,
    BottomInput,
    SubmitButton,
}

impl Focus {
    /// Next element in tab order
    pub fn next(self) -> Self {
        match self {
            Focus::TopInput => Focus::BottomInput,
            Focus::BottomInput => Focus::SubmitButton,
            Focus::SubmitButton => Focus::TopInput,
        }
    }

    /// Previous element in tab order
    pub fn previous(self) -> Self {
        match self {
            Focus::TopInput => Focus::SubmitButton,
            Focus::BottomInput => Focus::TopInput,
            Focus::SubmitButton => Focus::BottomInput,
        }
    }

    /// The caption field under focus, if any
    pub fn field(self) -> Option<CaptionField> {
        match self {
            Focus::TopInput => Some(CaptionField::Top),
            Focus::BottomInput => Some(CaptionField::Bottom),
            Focus::SubmitButton => None,
        }
    }
}

/// A single-line text input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    pub value: String,
    pub border: BorderStyle,
}

impl TextInput {
    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }
}

/// Where a caption overlay is anchored inside the output container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAnchor {
    Top,
    Bottom,
}

/// Text styling shared by both caption overlays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub bold: bool,
    pub outlined: bool,
    pub centered: bool,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            bold: true,
            outlined: true,
            centered: true,
        }
    }
}

/// A child of the output container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputElement {
    /// The meme template image
    Image {
        url: String,
        alt: String,
        width: u32,
        height: u32,
    },
    /// Caption text drawn over the image
    Overlay {
        anchor: OverlayAnchor,
        text: String,
        style: OverlayStyle,
    },
}

/// The element that rendered memes are placed into
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputContainer {
    /// Set once a meme has been rendered into the container
    pub styled: bool,
    pub children: Vec<OutputElement>,
}

impl OutputContainer {
    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// The rendered image, if any
    pub fn image(&self) -> Option<&OutputElement> {
        self.children
            .iter()
            .find(|child| matches!(child, OutputElement::Image { .. }))
    }

    /// Texts of the rendered overlays, in insertion order
    pub fn overlay_texts(&self) -> Vec<&str> {
        self.children
            .iter()
            .filter_map(|child| match child {
                OutputElement::Overlay { text, .. } => Some(text.as_str()),
                OutputElement::Image { .. } => None,
            })
            .collect()
    }
}

/// All elements of the editor screen
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub top_input: TextInput,
    pub bottom_input: TextInput,
    pub output: OutputContainer,
    pub error_text: String,
    pub focus: Focus,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_mut(&mut self, field: CaptionField) -> &mut TextInput {
        match field {
            CaptionField::Top => &mut self.top_input,
            CaptionField::Bottom => &mut self.bottom_input,
        }
    }

    /// The text input under focus, if any
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let field = self.focus.field()?;
        Some(self.input_mut(field))
    }
}
