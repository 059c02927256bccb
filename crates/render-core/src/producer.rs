//! The two capabilities a content producer can offer.
//!
//! Drawing against a [`CursorContext`] is mandatory. Composing an HTML
//! fragment is optional, and because [`ComposeMarkup`] extends
//! [`DrawContent`], the browser-print backend can demand it in its bounds:
//! a producer without a markup strategy cannot be handed to that backend.

use crate::cursor::CursorContext;
use crate::error::RenderError;

/// Imperative rendering onto a cursor context (the vector path).
pub trait DrawContent {
    type Data: ?Sized;

    fn draw(&self, data: &Self::Data, ctx: &mut CursorContext<'_>) -> Result<(), RenderError>;
}

/// Declarative rendering to an HTML fragment (the browser-print path).
pub trait ComposeMarkup: DrawContent {
    fn compose(&self, data: &Self::Data) -> Result<String, RenderError>;
}

impl<P: DrawContent + ?Sized> DrawContent for &P {
    type Data = P::Data;

    fn draw(&self, data: &Self::Data, ctx: &mut CursorContext<'_>) -> Result<(), RenderError> {
        (**self).draw(data, ctx)
    }
}

impl<P: ComposeMarkup + ?Sized> ComposeMarkup for &P {
    fn compose(&self, data: &Self::Data) -> Result<String, RenderError> {
        (**self).compose(data)
    }
}
