// Copyright @yucwang 2021

use crate::core::error::Result;
use crate::math::bitmap::Bitmap;

pub trait Renderer {
    fn render(&self) -> Result<Bitmap>;
}
