#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub struct Edge<V> {
    source: V,
    target: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    #[inline]
    pub fn source(&self) -> &V {
        &self.source
    }

    #[inline]
    pub fn target(&self) -> &V {
        &self.target
    }

    pub fn into_parts(self) -> (V, V) {
        (self.source, self.target)
    }
}

impl<V: Clone> Edge<V> {
    pub fn reversed(&self) -> Self {
        Self { source: self.target.clone(), target: self.source.clone() }
    }
}

impl<V: PartialEq> Edge<V> {
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self::new(source, target)
    }
}
