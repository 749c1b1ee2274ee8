use crate::{
    compile::compiler::compile_scene,
    compile::document::RenderDocument,
    foundation::error::BlobscapeResult,
    foundation::rng::SeededRandom,
    recipes::registry::RecipeRegistry,
    scene::model::SceneConfig,
};

/// Output of one generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct Generated {
    /// Recipe output, with canonical colors.
    pub config: SceneConfig,
    /// Compiled form of `config`.
    pub document: RenderDocument,
}

/// Apply `recipe` to `base` and compile the result.
///
/// One [`SeededRandom`] built from `seed` drives every random choice in the recipe, and blob
/// geometry is seeded by shape ids drawn from it, so the whole scene is a pure function of
/// `(recipe, base, seed)`.
#[tracing::instrument(skip(registry, base), fields(width = base.width, height = base.height))]
pub fn generate(
    registry: &RecipeRegistry,
    recipe: &str,
    base: &SceneConfig,
    seed: u32,
) -> BlobscapeResult<Generated> {
    let mut rng = SeededRandom::new(seed);
    let config = registry.apply(recipe, base, &mut rng)?;
    let document = compile_scene(&config)?;
    Ok(Generated { config, document })
}

/// [`generate`], returning only the SVG markup.
pub fn generate_svg(
    registry: &RecipeRegistry,
    recipe: &str,
    base: &SceneConfig,
    seed: u32,
) -> BlobscapeResult<String> {
    generate(registry, recipe, base, seed).map(|g| g.document.to_svg())
}
