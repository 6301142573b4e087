//! Source column names

/// Employee name
pub const NAME: &str = "Nombre";
/// Organisational unit
pub const UNIT: &str = "Área";
/// Unadjusted attrition probability
pub const BASE_PROBABILITY: &str = "Probabilidad_Fuga_Base";
/// Leadership score
pub const LEADERSHIP: &str = "Liderazgo";
/// Compensation and benefits score
pub const COMPENSATION: &str = "Salario_Beneficios";
/// Training score
pub const TRAINING: &str = "Formacion";
