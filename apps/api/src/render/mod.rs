//! Pure HTML renderers: every function in this tree is a deterministic,
//! side-effect-free mapping from resume data to a markup string. The same
//! fragments feed the on-screen preview and the PDF export input, so none
//! of them may depend on anything but their arguments.

pub mod assembler;
pub mod experience;
pub mod html;
pub mod markdown;
pub mod skills;
