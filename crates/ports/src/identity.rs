//! 类型与方法标识

use derive_more::{Display, From};
use std::fmt;
use std::sync::Arc;

/// 类型标识（全限定名）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct TypeRef(Arc<str>);

impl TypeRef {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// 去掉包路径后的类型名
    pub fn simple_name(&self) -> &str {
        self.0.rsplit(['.', ':']).next().unwrap_or(&self.0)
    }
}

impl From<&str> for TypeRef {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeRef {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// 方法签名：方法名 + 参数类型
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodSignature {
    name: Arc<str>,
    parameters: Arc<[TypeRef]>,
}

impl MethodSignature {
    pub fn new<P>(name: impl Into<Arc<str>>, parameters: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<TypeRef>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[TypeRef] {
        &self.parameters
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(param.simple_name())?;
        }
        f.write_str(")")
    }
}

/// 方法标识：声明类型 + 签名
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    declaring_type: TypeRef,
    signature: MethodSignature,
}

impl MethodRef {
    pub fn new(declaring_type: impl Into<TypeRef>, signature: MethodSignature) -> Self {
        Self {
            declaring_type: declaring_type.into(),
            signature,
        }
    }

    /// 便捷构造：`MethodRef::of("Service", "save", ["Item"])`
    pub fn of<P>(
        declaring_type: impl Into<TypeRef>,
        name: impl Into<Arc<str>>,
        parameters: impl IntoIterator<Item = P>,
    ) -> Self
    where
        P: Into<TypeRef>,
    {
        Self::new(declaring_type, MethodSignature::new(name, parameters))
    }

    pub fn declaring_type(&self) -> &TypeRef {
        &self.declaring_type
    }

    pub fn signature(&self) -> &MethodSignature {
        &self.signature
    }

    pub fn name(&self) -> &str {
        self.signature.name()
    }
}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type.simple_name(), self.signature)
    }
}

/// 可携带标记的元素：方法或类型
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, From)]
pub enum AnnotatedElement {
    Method(MethodRef),
    Type(TypeRef),
}

impl From<&MethodRef> for AnnotatedElement {
    fn from(method: &MethodRef) -> Self {
        Self::Method(method.clone())
    }
}

impl From<&TypeRef> for AnnotatedElement {
    fn from(ty: &TypeRef) -> Self {
        Self::Type(ty.clone())
    }
}
