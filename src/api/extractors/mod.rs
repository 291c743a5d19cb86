/*
 * Responsibility
 *  - handlers に公開する extractor を束ねる
 */
mod lenient_json;

pub use lenient_json::LenientJson;
