use crate::{
    foundation::error::{BlobscapeError, BlobscapeResult},
    foundation::rng::SeededRandom,
    recipes::builtin,
    scene::model::{AnimationIntent, BaseColor, SceneConfig, Shape},
};

/// What a recipe decides; merged over the caller's base config by [`Recipe::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneOverrides {
    /// Replacement background, if any.
    pub base_color: Option<BaseColor>,
    /// Replacement grain strength, if any.
    pub noise_amount: Option<f64>,
    /// Replacement grain scale, if any.
    pub noise_scale: Option<f64>,
    /// The recipe's shapes (always replaces the base shapes).
    pub shapes: Vec<Shape>,
    /// Replacement motion intent, if any.
    pub animation: Option<AnimationIntent>,
}

impl SceneOverrides {
    /// Merge over `base`, leaving unset fields as they were.
    pub fn merge_over(self, base: &SceneConfig) -> SceneConfig {
        SceneConfig {
            width: base.width,
            height: base.height,
            base_color: self.base_color.unwrap_or_else(|| base.base_color.clone()),
            noise_amount: self.noise_amount.unwrap_or(base.noise_amount),
            noise_scale: self.noise_scale.unwrap_or(base.noise_scale),
            shapes: self.shapes,
            animation: self.animation.unwrap_or(base.animation),
        }
    }
}

/// Recipe body: reads the base config, draws from the scene's random source.
pub type RecipeFn = fn(&SceneConfig, &mut SeededRandom) -> SceneOverrides;

/// A named visual style.
#[derive(Clone, Copy, Debug)]
pub struct Recipe {
    /// Registry key.
    pub name: &'static str,
    /// One-line description of the mood.
    pub description: &'static str,
    /// Fewest shapes the recipe emits.
    pub min_shapes: usize,
    /// Most shapes the recipe emits.
    pub max_shapes: usize,
    build: RecipeFn,
}

impl Recipe {
    /// Define a recipe.
    pub const fn new(
        name: &'static str,
        description: &'static str,
        min_shapes: usize,
        max_shapes: usize,
        build: RecipeFn,
    ) -> Self {
        Self {
            name,
            description,
            min_shapes,
            max_shapes,
            build,
        }
    }

    /// Run the recipe over `base`. The result has every color in canonical HSL form.
    #[tracing::instrument(skip(self, base, rng), fields(recipe = self.name))]
    pub fn apply(&self, base: &SceneConfig, rng: &mut SeededRandom) -> SceneConfig {
        let overrides = (self.build)(base, rng);
        tracing::debug!(shapes = overrides.shapes.len(), "recipe produced shapes");
        overrides.merge_over(base).normalized()
    }
}

/// Fixed, ordered set of recipes addressable by name.
#[derive(Clone, Debug)]
pub struct RecipeRegistry {
    recipes: Vec<Recipe>,
}

impl Default for RecipeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RecipeRegistry {
    /// Registry with no recipes.
    pub fn empty() -> Self {
        Self {
            recipes: Vec::new(),
        }
    }

    /// Registry with every built-in recipe, in documentation order.
    pub fn builtin() -> Self {
        Self {
            recipes: builtin::BUILTIN.to_vec(),
        }
    }

    /// Add a recipe. Names must be unique.
    pub fn register(&mut self, recipe: Recipe) -> BlobscapeResult<()> {
        if self.get(recipe.name).is_some() {
            return Err(BlobscapeError::recipe(format!(
                "duplicate recipe name '{}'",
                recipe.name
            )));
        }
        if recipe.min_shapes > recipe.max_shapes {
            return Err(BlobscapeError::recipe(format!(
                "recipe '{}' has min_shapes > max_shapes",
                recipe.name
            )));
        }
        self.recipes.push(recipe);
        Ok(())
    }

    /// Look up a recipe by name.
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Recipes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Recipe names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.recipes.iter().map(|r| r.name)
    }

    /// Number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether no recipes are registered.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Resolve `name` and apply it. Unknown names are a [`BlobscapeError::Recipe`].
    pub fn apply(
        &self,
        name: &str,
        base: &SceneConfig,
        rng: &mut SeededRandom,
    ) -> BlobscapeResult<SceneConfig> {
        let recipe = self.get(name).ok_or_else(|| {
            BlobscapeError::recipe(format!(
                "unknown recipe '{name}' (known: {})",
                self.names().collect::<Vec<_>>().join(", ")
            ))
        })?;
        Ok(recipe.apply(base, rng))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/recipes/registry.rs"]
mod tests;
