//! Visual phases of the dialog feedback layer.

/// Step of a scripted dialog sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// Nothing playing; feedback layer hidden.
    #[default]
    Idle,
    /// Spinner while the outcome is "computed".
    Pending,
    /// Check mark, success copy and background pulse.
    Success,
    /// Cross, failure copy and a shake on the dialog.
    Failure,
}

/// Which sub-elements of the feedback layer are shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct AnimationLayer {
    /// Overlay layer hosting the feedback.
    pub layer: bool,
    /// Loading spinner.
    pub spinner: bool,
    /// Success check mark.
    pub check: bool,
    /// Failure cross.
    pub cross: bool,
    /// Success copy.
    pub success_text: bool,
    /// Failure copy.
    pub failure_text: bool,
    /// Background pulse.
    pub pulse: bool,
    /// Shake effect on the dialog content.
    pub shake: bool,
    /// Slide-out exit transition on the dialog content.
    pub slide_out: bool,
}

impl AnimationLayer {
    /// The same layer with the exit transition playing on top of it.
    #[must_use]
    pub const fn sliding_out(self) -> Self {
        Self {
            slide_out: true,
            ..self
        }
    }
}

impl AnimationPhase {
    /// Sub-element visibility for this phase.
    #[must_use]
    pub const fn layer(self) -> AnimationLayer {
        let hidden = AnimationLayer {
            layer: false,
            spinner: false,
            check: false,
            cross: false,
            success_text: false,
            failure_text: false,
            pulse: false,
            shake: false,
            slide_out: false,
        };
        match self {
            Self::Idle => hidden,
            Self::Pending => AnimationLayer {
                layer: true,
                spinner: true,
                ..hidden
            },
            Self::Success => AnimationLayer {
                layer: true,
                check: true,
                success_text: true,
                pulse: true,
                ..hidden
            },
            Self::Failure => AnimationLayer {
                layer: true,
                cross: true,
                failure_text: true,
                shake: true,
                ..hidden
            },
        }
    }

    /// Whether a scripted sequence is still running.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Pending | Self::Success | Self::Failure)
    }
}
