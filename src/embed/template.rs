use std::marker::PhantomData;

/// A compiled-in asset with placeholder tokens that are substituted at
/// write time.
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V: TemplateVars> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }

    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Substitution set for one template family.
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}
